//! Category browse views.
//!
//! A view is one open category screen: it fetches a page of top-level
//! category trees in the background, then tracks which node is active, which
//! nodes are expanded and which products are shown. Products shown for a node
//! are its own plus those of every descendant, in pre-order.
//!
//! A fetch that lands after its view was closed or reloaded is dropped.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/catalog-views` | Open a view (`page`, `limit`, `search`) |
//! | GET | `/api/catalog-views/{view_id}` | Current view state |
//! | DELETE | `/api/catalog-views/{view_id}` | Close the view |
//! | POST | `/api/catalog-views/{view_id}/reload` | Refetch the tree |
//! | POST | `/api/catalog-views/{view_id}/select/{category_id}` | Make a category active |
//! | POST | `/api/catalog-views/{view_id}/toggle/{category_id}` | Expand or collapse a category |

pub mod browser;
pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod selection;
pub mod services;

pub use services::CatalogViewService;
