//! Navigation gate for browser page loads.
//!
//! Redirects anonymous visitors away from the dashboard and signed-in
//! visitors away from the login and register pages, before any route handler
//! runs. This is a UX convenience, not a security boundary: every API call
//! re-checks the session, so a forged cookie buys a page render and nothing
//! else. The strict policy verifies the token here as well, at the cost of a
//! signature check per navigation.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use url::form_urlencoded;

use crate::api::handlers::auth::session::extract_session_token;
use crate::api::handlers::auth::token::{TokenOutcome, verify_session};
use crate::api::handlers::auth::{AuthState, EdgeAuthPolicy};

pub async fn edge_guard(
    State(auth_state): State<Arc<AuthState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    if !intercepts(&path) {
        return next.run(request).await;
    }

    let signed_in = has_session(request.headers(), &auth_state);

    // Signed-in visitors have no business on the login or register page.
    if matches!(path.as_str(), "/login" | "/register") && signed_in {
        return Redirect::temporary("/dashboard").into_response();
    }

    // Anonymous dashboard visits bounce to login, which returns them here
    // via callbackUrl after a successful sign-in.
    if path.starts_with("/dashboard") && !signed_in {
        let callback: String = form_urlencoded::byte_serialize(path.as_bytes()).collect();
        return Redirect::temporary(&format!("/login?callbackUrl={callback}")).into_response();
    }

    next.run(request).await
}

/// Page navigations only: API, docs, health, and asset requests pass through.
fn intercepts(path: &str) -> bool {
    const PASS_PREFIXES: [&str; 4] = ["/api", "/docs", "/health", "/assets"];
    if PASS_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return false;
    }

    // File requests (favicon.ico, main.js) carry an extension in the last
    // segment.
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    !last_segment.contains('.')
}

/// Token presence decides under the optimistic policy; the strict policy
/// demands a valid signature too.
fn has_session(headers: &HeaderMap, auth_state: &AuthState) -> bool {
    let Some(token) = extract_session_token(headers) else {
        return false;
    };

    match auth_state.config().edge_auth_policy() {
        EdgeAuthPolicy::Optimistic => true,
        EdgeAuthPolicy::Strict => {
            matches!(verify_session(&token, auth_state), TokenOutcome::Valid(_))
        }
    }
}
