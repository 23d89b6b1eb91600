//! Restaurant entity, request shapes, filter and paging.

mod paging;
mod restaurant;

pub use paging::{Paging, DEFAULT_LIMIT, MAX_LIMIT};
pub use restaurant::{
    Filter, ModelError, Restaurant, RestaurantCreate, RestaurantUpdate, ENTITY_NAME, STATUS_ACTIVE,
    STATUS_DELETED,
};
