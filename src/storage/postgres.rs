//! `RestaurantStore` backed by a sqlx PostgreSQL pool.

use crate::error::{AppError, RecordNotFound};
use crate::model::{Filter, Paging, Restaurant, RestaurantCreate, RestaurantUpdate};
use crate::sql;
use crate::storage::RestaurantStore;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres};

#[derive(Clone, Debug)]
pub struct PgRestaurantStore {
    pool: PgPool,
}

impl PgRestaurantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn execute(&self, q: &sql::QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query::<Postgres>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl RestaurantStore for PgRestaurantStore {
    async fn create(&self, data: &mut RestaurantCreate) -> Result<(), AppError> {
        let q = sql::insert(data);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_scalar::<Postgres, i32>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let id = query.fetch_one(&self.pool).await?;
        data.id = Some(id);
        Ok(())
    }

    async fn list(&self, filter: &Filter, paging: &mut Paging) -> Result<Vec<Restaurant>, AppError> {
        let q = sql::count(filter);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut count = sqlx::query_scalar::<Postgres, i64>(&q.sql);
        for p in &q.params {
            count = count.bind(p.clone());
        }
        paging.total = count.fetch_one(&self.pool).await?;

        let q = sql::select_list(filter, paging);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<Postgres, Restaurant>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn get(&self, id: i32) -> Result<Restaurant, AppError> {
        let q = sql::select_by_id(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<Postgres, Restaurant>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        query
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RecordNotFound.into())
    }

    async fn update(&self, id: i32, data: &RestaurantUpdate) -> Result<(), AppError> {
        let Some(q) = sql::update(id, data) else {
            return Ok(());
        };
        if self.execute(&q).await? == 0 {
            return Err(RecordNotFound.into());
        }
        Ok(())
    }

    async fn soft_delete(&self, id: i32) -> Result<(), AppError> {
        if self.execute(&sql::soft_delete(id)).await? == 0 {
            return Err(RecordNotFound.into());
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::{apply_migrations, ensure_database_exists};
    use crate::model::{STATUS_ACTIVE, STATUS_DELETED};
    use crate::service::{
        CreateRestaurantBiz, DeleteRestaurantBiz, GetRestaurantBiz, ListRestaurantBiz,
        UpdateRestaurantBiz,
    };
    use crate::test::db::TestDb;
    use axum::http::StatusCode;

    async fn create(store: &PgRestaurantStore, name: &str, addr: &str) -> i32 {
        let mut data = RestaurantCreate {
            name: name.into(),
            addr: addr.into(),
            ..Default::default()
        };
        CreateRestaurantBiz::new(store).create(&mut data).await.unwrap();
        data.id.unwrap()
    }

    async fn list_ids(store: &PgRestaurantStore, page: i64, limit: i64) -> (Vec<i32>, i64) {
        let mut filter = Filter::default();
        let mut paging = Paging::new(page, limit);
        let rows = ListRestaurantBiz::new(store)
            .list(&mut filter, &mut paging)
            .await
            .unwrap();
        (rows.iter().map(|r| r.id).collect(), paging.total)
    }

    #[tokio::test]
    async fn create_trims_name_and_returns_generated_id() {
        let Some(db) = TestDb::new().await else { return };
        let store = PgRestaurantStore::new(db.pool.clone());

        let id = create(&store, " Joe's Diner ", "1 Main St").await;
        assert!(id > 0);

        let row = GetRestaurantBiz::new(&store).get(id).await.unwrap();
        assert_eq!(row.name, "Joe's Diner");
        assert_eq!(row.addr, "1 Main St");
        assert_eq!(row.status, STATUS_ACTIVE);
    }

    #[tokio::test]
    async fn list_pages_active_rows_newest_first() {
        let Some(db) = TestDb::new().await else { return };
        let store = PgRestaurantStore::new(db.pool.clone());

        let mut ids = Vec::new();
        for i in 1..=5 {
            ids.push(create(&store, &format!("r{i}"), "addr").await);
        }
        store.soft_delete(ids[4]).await.unwrap();

        let (first, total) = list_ids(&store, 1, 3).await;
        assert_eq!(total, 4);
        assert_eq!(first, vec![ids[3], ids[2], ids[1]]);

        let (second, total) = list_ids(&store, 2, 3).await;
        assert_eq!(total, 4);
        assert_eq!(second, vec![ids[0]]);

        let (past_end, total) = list_ids(&store, i64::MAX, 50).await;
        assert!(past_end.is_empty());
        assert_eq!(total, 4);
    }

    #[tokio::test]
    async fn update_touches_only_given_fields() {
        let Some(db) = TestDb::new().await else { return };
        let store = PgRestaurantStore::new(db.pool.clone());
        let id = create(&store, "Joe's Diner", "1 Main St").await;

        let mut patch = RestaurantUpdate {
            name: None,
            addr: Some("2 Main St".into()),
        };
        UpdateRestaurantBiz::new(&store).update(id, &mut patch).await.unwrap();
        let row = store.get(id).await.unwrap();
        assert_eq!(row.name, "Joe's Diner");
        assert_eq!(row.addr, "2 Main St");

        store.update(id, &RestaurantUpdate::default()).await.unwrap();
        assert_eq!(store.get(id).await.unwrap().addr, "2 Main St");
    }

    #[tokio::test]
    async fn soft_delete_keeps_row_and_hides_it() {
        let Some(db) = TestDb::new().await else { return };
        let store = PgRestaurantStore::new(db.pool.clone());
        let id = create(&store, "Pho 24", "Q1").await;

        DeleteRestaurantBiz::new(&store).delete(id).await.unwrap();
        assert_eq!(store.get(id).await.unwrap().status, STATUS_DELETED);
        assert_eq!(list_ids(&store, 1, 50).await, (vec![], 0));

        let err = GetRestaurantBiz::new(&store).get(id).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::GONE);
    }

    #[tokio::test]
    async fn missing_rows_report_record_not_found() {
        let Some(db) = TestDb::new().await else { return };
        let store = PgRestaurantStore::new(db.pool.clone());

        assert!(store.get(999).await.unwrap_err().root_is::<RecordNotFound>());
        let patch = RestaurantUpdate {
            name: Some("x".into()),
            addr: None,
        };
        assert!(store.update(999, &patch).await.unwrap_err().root_is::<RecordNotFound>());
        assert!(store.soft_delete(999).await.unwrap_err().root_is::<RecordNotFound>());
    }

    #[tokio::test]
    async fn bootstrap_is_idempotent_and_ping_succeeds() {
        let Some(db) = TestDb::new().await else { return };
        ensure_database_exists(&db.url).await.unwrap();
        apply_migrations(&db.pool).await.unwrap();
        PgRestaurantStore::new(db.pool.clone()).ping().await.unwrap();
    }
}
