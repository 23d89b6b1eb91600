//! In-process `RestaurantStore` with the same semantics as the SQL store. Used by tests.

use crate::error::{AppError, RecordNotFound};
use crate::model::{Filter, Paging, Restaurant, RestaurantCreate, RestaurantUpdate, STATUS_ACTIVE, STATUS_DELETED};
use crate::storage::RestaurantStore;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: Mutex<Vec<Restaurant>>,
    offline: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `ping` fail, as an unreachable database would.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of stored rows, deleted ones included.
    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl RestaurantStore for InMemoryStore {
    async fn create(&self, data: &mut RestaurantCreate) -> Result<(), AppError> {
        let mut rows = self.rows.lock().await;
        let id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let now = Utc::now();
        rows.push(Restaurant {
            id,
            name: data.name.clone(),
            addr: data.addr.clone(),
            status: STATUS_ACTIVE,
            created_at: now,
            updated_at: now,
        });
        data.id = Some(id);
        Ok(())
    }

    async fn list(&self, filter: &Filter, paging: &mut Paging) -> Result<Vec<Restaurant>, AppError> {
        let rows = self.rows.lock().await;
        let mut matched: Vec<&Restaurant> = rows
            .iter()
            .filter(|r| filter.status.is_empty() || filter.status.contains(&r.status))
            .collect();
        matched.sort_by(|a, b| b.id.cmp(&a.id));
        paging.total = matched.len() as i64;
        let offset = usize::try_from(paging.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(paging.limit).unwrap_or(0);
        Ok(matched.into_iter().skip(offset).take(limit).cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Restaurant, AppError> {
        let rows = self.rows.lock().await;
        rows.iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| RecordNotFound.into())
    }

    async fn update(&self, id: i32, data: &RestaurantUpdate) -> Result<(), AppError> {
        if data.is_empty() {
            return Ok(());
        }
        let mut rows = self.rows.lock().await;
        let row = rows.iter_mut().find(|r| r.id == id).ok_or(RecordNotFound)?;
        if let Some(name) = &data.name {
            row.name = name.clone();
        }
        if let Some(addr) = &data.addr {
            row.addr = addr.clone();
        }
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn soft_delete(&self, id: i32) -> Result<(), AppError> {
        let mut rows = self.rows.lock().await;
        let row = rows.iter_mut().find(|r| r.id == id).ok_or(RecordNotFound)?;
        row.status = STATUS_DELETED;
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::error_db("database unavailable"));
        }
        Ok(())
    }
}
