//! Flat product records behind the product table and product form.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/products` | List products (`page`, `limit`, `categories`, `search`) |
//! | POST | `/api/products` | Create product |
//! | GET | `/api/products/{id}` | Get product |
//! | PUT | `/api/products/{id}` | Update product |
//! | DELETE | `/api/products/{id}` | Delete product |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProductService;
