pub mod category_handler;

pub use category_handler::{
    __path_create_category, __path_get_category, __path_list_categories,
    __path_list_category_products, create_category, get_category, list_categories,
    list_category_products,
};
