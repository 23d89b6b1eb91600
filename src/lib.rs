//! Restaurant CRUD REST backend: transport → business logic → storage.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod storage;

#[cfg(test)]
mod test;

pub use config::Settings;
pub use error::{AppError, BootstrapError, ConfigError, RecordNotFound};
pub use migration::{apply_migrations, ensure_database_exists};
pub use response::{simple_success, success_with_paging};
pub use routes::app;
pub use state::AppState;
pub use storage::{InMemoryStore, PgRestaurantStore, RestaurantStore};
