//! Create use case: validate, then insert.

use crate::error::AppError;
use crate::model::RestaurantCreate;
use crate::storage::RestaurantStore;

pub struct CreateRestaurantBiz<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: RestaurantStore + ?Sized> CreateRestaurantBiz<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Validate, then insert. `data.id` holds the new id on success.
    pub async fn create(&self, data: &mut RestaurantCreate) -> Result<(), AppError> {
        data.validate()?;
        self.store.create(data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelError;
    use crate::storage::InMemoryStore;

    #[tokio::test]
    async fn blank_name_is_rejected_before_storage() {
        let store = InMemoryStore::new();
        let biz = CreateRestaurantBiz::new(&store);
        let mut data = RestaurantCreate {
            name: "   ".into(),
            addr: "1 Main St".into(),
            ..Default::default()
        };

        let err = biz.create(&mut data).await.unwrap_err();
        assert!(err.root_is::<ModelError>());
        assert_eq!(err.status_code, 400);
        assert!(store.is_empty().await);
        assert_eq!(data.id, None);
    }

    #[tokio::test]
    async fn stores_trimmed_name() {
        let store = InMemoryStore::new();
        let biz = CreateRestaurantBiz::new(&store);
        let mut data = RestaurantCreate {
            name: " Joe's Diner ".into(),
            addr: "1 Main St".into(),
            ..Default::default()
        };

        biz.create(&mut data).await.unwrap();
        let id = data.id.unwrap();
        let stored = store.get(id).await.unwrap();
        assert_eq!(stored.name, "Joe's Diner");
        assert_eq!(stored.addr, "1 Main St");
        assert!(stored.is_active());
    }
}
