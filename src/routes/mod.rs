//! Router assembly and middleware.

mod common;
mod restaurant;

pub use common::common_routes;
pub use restaurant::restaurant_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Full application: common routes plus `/v1/restaurants`, with middleware.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .merge(common_routes(state.clone()))
        .merge(restaurant_routes(state));
    with_middleware(router)
}

/// Request tracing and panic recovery into the error envelope. The body limit is
/// enforced by the extractors, so oversized bodies are rejected as envelopes too.
pub fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(recover))
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
    )
}

/// A panic carrying an `AppError` keeps its status; anything else is a 500.
fn recover(panic: Box<dyn Any + Send + 'static>) -> Response {
    let err = match panic.downcast::<AppError>() {
        Ok(err) => *err,
        Err(panic) => {
            let detail = if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = panic.downcast_ref::<&str>() {
                (*s).to_string()
            } else {
                "handler panicked".to_string()
            };
            AppError::internal(detail)
        }
    };
    err.into_response()
}
