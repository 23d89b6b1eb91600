//! Typed errors, the JSON error envelope, and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Boxed root cause carried by [`AppError`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

/// Startup failure while preparing the database.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database bootstrap failed: {0}")]
    Db(#[from] sqlx::Error),
}

/// Generic sentinel returned by storage when a lookup matches no row.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("record not found")]
pub struct RecordNotFound;

/// Error envelope rendered as `{status_code, message, log, error_key}`.
///
/// The root cause may itself be an `AppError`; [`AppError::root_error`] always
/// walks down to the innermost non-envelope cause.
#[derive(Debug, Serialize)]
pub struct AppError {
    pub status_code: u16,
    #[serde(skip)]
    root: BoxError,
    pub message: String,
    pub log: String,
    #[serde(rename = "error_key")]
    pub key: String,
}

impl AppError {
    /// Client error (400) with explicit message, log line and key.
    pub fn new_error_response(
        root: impl Into<BoxError>,
        message: impl Into<String>,
        log: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self::new_full_error_response(StatusCode::BAD_REQUEST, root, message, log, key)
    }

    pub fn new_full_error_response(
        status: StatusCode,
        root: impl Into<BoxError>,
        message: impl Into<String>,
        log: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        AppError {
            status_code: status.as_u16(),
            root: root.into(),
            message: message.into(),
            log: log.into(),
            key: key.into(),
        }
    }

    pub fn new_unauthorized(
        root: impl Into<BoxError>,
        message: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self::new_full_error_response(StatusCode::UNAUTHORIZED, root, message, "", key)
    }

    /// Client error whose log line is the root cause's text. Without a root,
    /// the message itself becomes the root.
    pub fn new_custom_error(
        root: Option<BoxError>,
        message: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        let message = message.into();
        match root {
            Some(root) => {
                let log = root.to_string();
                Self::new_error_response(root, message, log, key)
            }
            None => Self::new_error_response(message.clone(), message.clone(), message, key),
        }
    }

    pub fn error_db(err: impl Into<BoxError>) -> Self {
        let root = err.into();
        let log = root.to_string();
        Self::new_full_error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            root,
            "something went wrong with DB",
            log,
            "DB_ERROR",
        )
    }

    pub fn invalid_request(err: impl Into<BoxError>) -> Self {
        let root = err.into();
        let log = root.to_string();
        Self::new_error_response(root, "invalid request", log, "ErrInvalidRequest")
    }

    pub fn internal(err: impl Into<BoxError>) -> Self {
        let root = err.into();
        let log = root.to_string();
        Self::new_full_error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            root,
            "something went wrong in the server",
            log,
            "ErrInternal",
        )
    }

    pub fn cannot_list_entity(entity: &str, err: impl Into<BoxError>) -> Self {
        entity_error(entity, err, |e| format!("cannot list {e}"), |e| format!("ErrCannotList{e}"))
    }

    pub fn cannot_delete_entity(entity: &str, err: impl Into<BoxError>) -> Self {
        entity_error(entity, err, |e| format!("cannot delete {e}"), |e| format!("ErrCannotDelete{e}"))
    }

    pub fn cannot_update_entity(entity: &str, err: impl Into<BoxError>) -> Self {
        entity_error(entity, err, |e| format!("cannot update {e}"), |e| format!("ErrCannotUpdate{e}"))
    }

    pub fn cannot_get_entity(entity: &str, err: impl Into<BoxError>) -> Self {
        entity_error(entity, err, |e| format!("cannot get {e}"), |e| format!("ErrCannotGet{e}"))
    }

    pub fn cannot_create_entity(entity: &str, err: impl Into<BoxError>) -> Self {
        entity_error(entity, err, |e| format!("cannot create {e}"), |e| format!("ErrCannotCreate{e}"))
    }

    pub fn entity_deleted(entity: &str, err: impl Into<BoxError>) -> Self {
        entity_error(entity, err, |e| format!("{e} deleted"), |e| format!("Err{e}Deleted"))
            .with_status(StatusCode::GONE)
    }

    pub fn entity_existed(entity: &str, err: impl Into<BoxError>) -> Self {
        entity_error(entity, err, |e| format!("{e} already exists"), |e| format!("Err{e}AlreadyExists"))
            .with_status(StatusCode::CONFLICT)
    }

    pub fn entity_not_found(entity: &str, err: impl Into<BoxError>) -> Self {
        entity_error(entity, err, |e| format!("{e} not found"), |e| format!("Err{e}NotFound"))
            .with_status(StatusCode::NOT_FOUND)
    }

    pub fn no_permission(err: impl Into<BoxError>) -> Self {
        Self::new_custom_error(Some(err.into()), "you have no permission", "ErrNoPermission")
            .with_status(StatusCode::FORBIDDEN)
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status_code = status.as_u16();
        self
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Innermost cause, skipping through nested envelopes.
    pub fn root_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        match self.root.downcast_ref::<AppError>() {
            Some(inner) => inner.root_error(),
            None => &*self.root,
        }
    }

    pub fn root_is<E: StdError + 'static>(&self) -> bool {
        self.root_error().is::<E>()
    }
}

/// Entity-scoped client error. Messages use the lower-cased entity name; keys keep its casing.
fn entity_error(
    entity: &str,
    err: impl Into<BoxError>,
    message: impl FnOnce(&str) -> String,
    key: impl FnOnce(&str) -> String,
) -> AppError {
    AppError::new_custom_error(Some(err.into()), message(&entity.to_lowercase()), key(entity))
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.root_error(), f)
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.root)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::error_db(err)
    }
}

impl From<RecordNotFound> for AppError {
    fn from(err: RecordNotFound) -> Self {
        AppError::new_full_error_response(
            StatusCode::NOT_FOUND,
            err,
            "record not found",
            "record not found",
            "ErrRecordNotFound",
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error_key = %self.key, log = %self.log, "request failed");
        } else {
            tracing::debug!(status = %status, error_key = %self.key, log = %self.log, "request rejected");
        }
        (status, Json(self)).into_response()
    }
}
