//! Card categories (Magic, Pokemon, Yu-Gi-Oh!, ...).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/categories` | Admin | Create category |
//! | GET | `/categories` | No | List categories |
//! | GET | `/categories/{id}` | No | Get category |
//! | PATCH | `/categories/{id}` | Admin | Update category |
//! | DELETE | `/categories/{id}` | Admin | Delete category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::CategoryService;
pub use stores::PgCategoryStore;
