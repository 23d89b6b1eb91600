//! Partial update of an active restaurant.

use crate::error::AppError;
use crate::model::RestaurantUpdate;
use crate::service::get::find_active;
use crate::storage::RestaurantStore;

pub struct UpdateRestaurantBiz<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: RestaurantStore + ?Sized> UpdateRestaurantBiz<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Apply the present fields of `data` to an active restaurant.
    pub async fn update(&self, id: i32, data: &mut RestaurantUpdate) -> Result<(), AppError> {
        data.validate()?;
        find_active(self.store, id).await?;
        self.store.update(id, data).await
    }
}
