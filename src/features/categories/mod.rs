//! Product categories feature.
//!
//! Categories form a forest: each node owns its direct products and its
//! subcategories. Listing is paginated over the top-level nodes; any node can
//! be fetched by id together with its subtree.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | List top-level categories (`tree`, `page`, `limit`, `search`) |
//! | POST | `/api/categories` | Create a top-level category |
//! | GET | `/api/categories/{id}` | Get category with its subtree |
//! | GET | `/api/categories/{id}/products` | All products under the category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod tree;

pub use services::CategoryService;
