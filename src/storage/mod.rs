//! Storage capability used by the business layer, with PostgreSQL and in-memory backends.

mod memory;
mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgRestaurantStore;

use crate::error::AppError;
use crate::model::{Filter, Paging, Restaurant, RestaurantCreate, RestaurantUpdate};
use async_trait::async_trait;

#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// Insert a row and write the generated id back into `data`.
    async fn create(&self, data: &mut RestaurantCreate) -> Result<(), AppError>;

    /// One page of rows matching `filter`; sets `paging.total` to the full match count.
    async fn list(&self, filter: &Filter, paging: &mut Paging) -> Result<Vec<Restaurant>, AppError>;

    /// Row by id regardless of status. Missing rows fail with `RecordNotFound`.
    async fn get(&self, id: i32) -> Result<Restaurant, AppError>;

    /// Write the present fields of `data`. An empty patch is a no-op.
    async fn update(&self, id: i32, data: &RestaurantUpdate) -> Result<(), AppError>;

    async fn soft_delete(&self, id: i32) -> Result<(), AppError>;

    /// Round-trip to the backing store, used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
