//! Success envelope: `{data}` or `{data, paging, filter}`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SuccessResponse<T, P = (), F = ()> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<P>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<F>,
}

pub fn simple_success<T: Serialize>(data: T) -> (StatusCode, Json<SuccessResponse<T>>) {
    (
        StatusCode::OK,
        Json(SuccessResponse {
            data,
            paging: None,
            filter: None,
        }),
    )
}

pub fn success_with_paging<T, P, F>(
    data: T,
    paging: P,
    filter: F,
) -> (StatusCode, Json<SuccessResponse<T, P, F>>)
where
    T: Serialize,
    P: Serialize,
    F: Serialize,
{
    (
        StatusCode::OK,
        Json(SuccessResponse {
            data,
            paging: Some(paging),
            filter: Some(filter),
        }),
    )
}
