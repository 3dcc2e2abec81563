/// Default page size for the product table
pub const DEFAULT_PRODUCT_PAGE_SIZE: usize = 10;

/// Default page size for the category listing
pub const DEFAULT_CATEGORY_PAGE_SIZE: usize = 5;

/// Default number of top-level categories loaded into a browse view
pub const DEFAULT_VIEW_PAGE_SIZE: usize = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: usize = 100;

// =============================================================================
// PRODUCT FORM
// =============================================================================

/// Separator between category labels in the `categories` query parameter
pub const CATEGORY_FILTER_SEPARATOR: char = '.';

/// Base URL for generated product photos
pub const SAMPLE_PHOTO_BASE_URL: &str = "https://api.slingacademy.com/public/sample-products";
