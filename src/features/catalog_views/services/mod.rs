mod view_service;

pub use view_service::{CatalogViewService, OpenedView};
