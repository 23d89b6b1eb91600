//! Shared application state for all routes. The store is injected at startup.

use crate::storage::RestaurantStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RestaurantStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RestaurantStore>) -> Self {
        Self { store }
    }
}
