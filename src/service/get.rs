//! Fetch by id. Missing rows are 404, soft-deleted rows are 410.

use crate::error::{AppError, RecordNotFound};
use crate::model::{Restaurant, ENTITY_NAME};
use crate::storage::RestaurantStore;

pub struct GetRestaurantBiz<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: RestaurantStore + ?Sized> GetRestaurantBiz<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn get(&self, id: i32) -> Result<Restaurant, AppError> {
        find_active(self.store, id).await
    }
}

/// Fetch a restaurant that exists and has not been soft-deleted.
pub(crate) async fn find_active<S: RestaurantStore + ?Sized>(
    store: &S,
    id: i32,
) -> Result<Restaurant, AppError> {
    let data = store.get(id).await.map_err(|err| {
        if err.root_is::<RecordNotFound>() {
            AppError::entity_not_found(ENTITY_NAME, err)
        } else {
            err
        }
    })?;
    if !data.is_active() {
        return Err(AppError::entity_deleted(
            ENTITY_NAME,
            format!("restaurant {id} has been deleted"),
        ));
    }
    Ok(data)
}
