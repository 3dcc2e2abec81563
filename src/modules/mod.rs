//! Modules layer - Infrastructure components behind the features
//!
//! Contains the catalog data source and its in-memory implementation.

pub mod catalog_store;
