//! Restaurant CRUD handlers. Decode failures become `invalid request` envelopes.

use crate::error::AppError;
use crate::model::{Filter, Paging, RestaurantCreate, RestaurantUpdate};
use crate::response::{simple_success, success_with_paging};
use crate::service::{
    CreateRestaurantBiz, DeleteRestaurantBiz, GetRestaurantBiz, ListRestaurantBiz,
    UpdateRestaurantBiz,
};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Body decode failure. Oversized bodies keep their 413.
fn bad_body(rejection: JsonRejection) -> AppError {
    let status = rejection.status();
    let err = AppError::invalid_request(rejection);
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        err.with_status(status)
    } else {
        err
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<RestaurantCreate>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(mut data) = body.map_err(bad_body)?;
    CreateRestaurantBiz::new(state.store.as_ref())
        .create(&mut data)
        .await?;
    Ok(simple_success(data.id))
}

pub async fn list(
    State(state): State<AppState>,
    paging: Result<Query<Paging>, QueryRejection>,
    filter: Result<Query<Filter>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(mut paging) = paging.map_err(AppError::invalid_request)?;
    paging.fulfill();
    let Query(mut filter) = filter.map_err(AppError::invalid_request)?;
    let rows = ListRestaurantBiz::new(state.store.as_ref())
        .list(&mut filter, &mut paging)
        .await?;
    Ok(success_with_paging(rows, paging, filter))
}

pub async fn read(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(AppError::invalid_request)?;
    let data = GetRestaurantBiz::new(state.store.as_ref()).get(id).await?;
    Ok(simple_success(data))
}

/// Responds with the patch as applied (trimmed name, untouched fields omitted).
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<RestaurantUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(AppError::invalid_request)?;
    let Json(mut data) = body.map_err(bad_body)?;
    UpdateRestaurantBiz::new(state.store.as_ref())
        .update(id, &mut data)
        .await?;
    Ok(simple_success(data))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(AppError::invalid_request)?;
    DeleteRestaurantBiz::new(state.store.as_ref())
        .delete(id)
        .await?;
    Ok(simple_success(true))
}
