//! Restaurant CRUD routes under `/v1/restaurants`. The collection answers with
//! and without a trailing slash.

use crate::handlers::restaurant::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const RESTAURANTS_PATH: &str = "/v1/restaurants";

pub fn restaurant_routes(state: AppState) -> Router {
    let collection = get(list).post(create);
    Router::new()
        .route(RESTAURANTS_PATH, collection.clone())
        .route(&format!("{RESTAURANTS_PATH}/"), collection)
        .route(
            &format!("{RESTAURANTS_PATH}/:id"),
            get(read).patch(update).delete(delete_handler),
        )
        .with_state(state)
}
