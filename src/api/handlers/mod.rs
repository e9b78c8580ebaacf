//! API handlers and shared helpers for the linkbio service.
//!
//! Handlers are grouped by resource. `auth` holds the session layer
//! (registration, login, tokens, cookies) that every protected group leans
//! on; `public` and the single-link reads serve visitors without a session.

pub mod analytics;
pub mod auth;
pub mod health;
pub mod links;
pub mod profile;
pub mod public;
pub mod root;
pub mod types;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use types::ErrorResponse;

/// Fixed 500 body; the cause stays in the logs, never in the response.
pub(crate) fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal server error")),
    )
        .into_response()
}
