mod product_dto;

pub use product_dto::{ListProductsQuery, ProductFormDto, ProductResponseDto, WarrantyEntryDto};
