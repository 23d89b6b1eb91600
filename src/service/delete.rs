//! Soft delete of an active restaurant.

use crate::error::AppError;
use crate::service::get::find_active;
use crate::storage::RestaurantStore;

pub struct DeleteRestaurantBiz<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: RestaurantStore + ?Sized> DeleteRestaurantBiz<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Soft delete: the row stays, with status 0.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        find_active(self.store, id).await?;
        self.store.soft_delete(id).await
    }
}
