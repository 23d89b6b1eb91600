//! Paged listing of active restaurants.

use crate::error::AppError;
use crate::model::{Filter, Paging, Restaurant, STATUS_ACTIVE};
use crate::storage::RestaurantStore;

pub struct ListRestaurantBiz<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: RestaurantStore + ?Sized> ListRestaurantBiz<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Active restaurants only, whatever `filter.status` held on entry.
    pub async fn list(
        &self,
        filter: &mut Filter,
        paging: &mut Paging,
    ) -> Result<Vec<Restaurant>, AppError> {
        filter.status = vec![STATUS_ACTIVE];
        self.store.list(filter, paging).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RestaurantCreate, STATUS_DELETED};
    use crate::storage::InMemoryStore;

    async fn seeded(n: usize) -> InMemoryStore {
        let store = InMemoryStore::new();
        for i in 0..n {
            let mut data = RestaurantCreate {
                name: format!("restaurant {i}"),
                ..Default::default()
            };
            store.create(&mut data).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn forces_active_status() {
        let store = seeded(3).await;
        store.soft_delete(2).await.unwrap();
        let biz = ListRestaurantBiz::new(&store);

        let mut filter = Filter {
            status: vec![STATUS_DELETED],
        };
        let mut paging = Paging::new(1, 10);
        let rows = biz.list(&mut filter, &mut paging).await.unwrap();

        assert_eq!(filter.status, vec![STATUS_ACTIVE]);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(paging.total, 2);
    }

    #[tokio::test]
    async fn pages_partition_active_records() {
        let store = seeded(7).await;
        let biz = ListRestaurantBiz::new(&store);
        let mut seen = Vec::new();

        for page in 1..=3 {
            let mut paging = Paging::new(page, 3);
            let rows = biz.list(&mut Filter::default(), &mut paging).await.unwrap();
            assert_eq!(paging.total, 7);
            assert_eq!(rows.len(), if page < 3 { 3 } else { 1 });
            seen.extend(rows.into_iter().map(|r| r.id));
        }

        assert_eq!(seen, vec![7, 6, 5, 4, 3, 2, 1]);
    }
}
