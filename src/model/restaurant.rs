//! Restaurant entity and its create/update/filter shapes.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENTITY_NAME: &str = "Restaurant";

pub const STATUS_ACTIVE: i32 = 1;
pub const STATUS_DELETED: i32 = 0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("name cannot be empty")]
    NameIsEmpty,
}

impl ModelError {
    fn key(&self) -> &'static str {
        match self {
            ModelError::NameIsEmpty => "ErrNameIsEmpty",
        }
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        let key = err.key();
        let message = err.to_string();
        AppError::new_error_response(err, message.clone(), message, key)
    }
}

/// Row of the `restaurants` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub addr: String,
    pub status: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Restaurant {
    pub const TABLE_NAME: &'static str = "restaurants";

    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}

/// Body of `POST /v1/restaurants`. `id` is filled in by storage after insert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantCreate {
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub addr: String,
}

impl RestaurantCreate {
    /// Trims `name` in place and rejects it when nothing is left.
    pub fn validate(&mut self) -> Result<(), ModelError> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(ModelError::NameIsEmpty);
        }
        Ok(())
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,
}

impl RestaurantUpdate {
    pub fn validate(&mut self) -> Result<(), ModelError> {
        if let Some(name) = self.name.as_mut() {
            *name = name.trim().to_string();
            if name.is_empty() {
                return Err(ModelError::NameIsEmpty);
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.addr.is_none()
    }
}

/// List constraints. `status` is never read from the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(skip_deserializing)]
    pub status: Vec<i32>,
}
