//! Category directory feature: one CRUD resource with a filtered,
//! sorted, paginated listing.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | Fetch one by `?id=` / `?slug=` |
//! | GET | `/api/categories/list` | Filtered listing with pagination |
//! | POST | `/api/categories` | Create |
//! | PATCH | `/api/categories/{id}` | Partial update |
//! | DELETE | `/api/categories/{id}` | Delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod query;
pub mod routes;
pub mod services;
pub mod store;

pub use services::CategoryService;
pub use store::PgCategoryStore;
