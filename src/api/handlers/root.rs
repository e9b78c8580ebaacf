//! Service banner for `/`, served when no static frontend is mounted.

use axum::{Json, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Banner {
    name: String,
    version: String,
    docs: String,
}

pub async fn root() -> impl IntoResponse {
    Json(Banner {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs: "/docs".to_string(),
    })
}
