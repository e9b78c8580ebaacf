//! Shared wire types for the API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Canonical error envelope: `{"error": "..."}`.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Canonical message envelope: `{"message": "..."}`.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A user as returned to its owner. The password hash never leaves storage.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub dark_mode: bool,
    pub theme_color: String,
    pub created_at: String,
    pub updated_at: String,
    /// Present only on responses that embed the user's links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<LinkResponse>>,
}

/// A link as returned to its owner.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub url: String,
    pub active: bool,
    /// Serialized as `order`; the column is `position` because ORDER is
    /// reserved in SQL.
    #[serde(rename = "order")]
    pub position: i32,
    pub clicks: i32,
    pub created_at: String,
    pub updated_at: String,
}
