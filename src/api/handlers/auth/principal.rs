//! Authenticated identity extraction.
//!
//! Flow overview: pull the token from the bearer header or the session
//! cookie, verify it, and hand back the identity downstream handlers use for
//! ownership checks.

use axum::{
    Json,
    http::{HeaderMap, StatusCode},
};
use uuid::Uuid;

use super::{
    session::extract_session_token,
    state::AuthState,
    token::{TokenOutcome, verify_session},
};
use crate::api::handlers::types::ErrorResponse;

/// Authenticated user context derived from the session token.
#[derive(Clone, Debug)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

/// Why a request failed authentication.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuthRejection {
    /// No bearer header and no `token` cookie.
    Missing,
    /// A token was presented but did not verify: bad signature, expired, or
    /// claims that do not parse.
    Invalid,
}

pub(crate) fn auth_error_response(err: &AuthRejection) -> (StatusCode, Json<ErrorResponse>) {
    let message = match err {
        AuthRejection::Missing => "No token provided",
        AuthRejection::Invalid => "Invalid token",
    };
    (StatusCode::UNAUTHORIZED, Json(ErrorResponse::new(message)))
}

/// Resolve the request headers to an identity, or reject with the reason.
pub(crate) fn require_auth(
    headers: &HeaderMap,
    auth_state: &AuthState,
) -> Result<Identity, AuthRejection> {
    let Some(token) = extract_session_token(headers) else {
        return Err(AuthRejection::Missing);
    };

    match verify_session(&token, auth_state) {
        TokenOutcome::Valid(claims) => {
            let id = Uuid::parse_str(&claims.id).map_err(|_| AuthRejection::Invalid)?;
            Ok(Identity {
                id,
                email: claims.email,
                name: claims.name,
            })
        }
        TokenOutcome::Expired | TokenOutcome::Malformed => Err(AuthRejection::Invalid),
    }
}
