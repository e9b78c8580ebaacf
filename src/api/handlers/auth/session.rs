//! Session cookie handling and the logout endpoint.

use axum::{
    Json,
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{AUTHORIZATION, InvalidHeaderValue, SET_COOKIE},
    },
    response::IntoResponse,
};

use super::state::AuthState;
use crate::api::handlers::types::MessageResponse;

const SESSION_COOKIE_NAME: &str = "token";

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn logout() -> impl IntoResponse {
    // Sessions are stateless, so logout only clears the cookie. A copy of the
    // token held elsewhere stays valid until it expires.
    let mut response_headers = HeaderMap::new();
    if let Ok(cookie) = clear_session_cookie() {
        response_headers.insert(SET_COOKIE, cookie);
    }
    (
        StatusCode::OK,
        response_headers,
        Json(MessageResponse::new("Logout successful")),
    )
        .into_response()
}

/// Build the `HttpOnly` cookie carrying the session token.
pub(super) fn session_cookie(
    auth_state: &AuthState,
    token: &str,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let ttl_seconds = auth_state.config().session_ttl_seconds();
    let cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; Secure; SameSite=Lax; Max-Age={ttl_seconds}"
    );
    HeaderValue::from_str(&cookie)
}

fn clear_session_cookie() -> Result<HeaderValue, InvalidHeaderValue> {
    let cookie = format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; Secure; SameSite=Lax; Max-Age=0");
    HeaderValue::from_str(&cookie)
}

/// Pull the session token out of a request, bearer header first, then the
/// `token` cookie. Malformed cookie pairs are skipped.
pub(crate) fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_bearer_token(headers) {
        return Some(token);
    }
    let header = headers.get(axum::http::header::COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let Some(key) = parts.next().map(str::trim) else {
            continue;
        };
        let Some(val) = parts.next().map(str::trim) else {
            continue;
        };
        if key == SESSION_COOKIE_NAME {
            return Some(val.to_string());
        }
    }
    None
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let trimmed = value.trim();
    let token = trimmed
        .strip_prefix("Bearer ")
        .or_else(|| trimmed.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
