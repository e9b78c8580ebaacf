//! Cookie/bearer JWT auth and the account endpoints.
//!
//! Sessions are stateless HS256 JWTs carrying `{id, email, name}`. The token
//! travels as an `Authorization: Bearer` header or an `HttpOnly` cookie named
//! `token`; the header wins when both are present. Logout clears the cookie
//! and nothing else, so a copy of the token stays valid until it expires.

pub(crate) mod login;
mod password;
pub(crate) mod principal;
pub(crate) mod register;
pub(crate) mod session;
mod state;
mod storage;
pub(crate) mod token;
pub(crate) mod types;
mod utils;

pub use state::{AuthConfig, AuthState, EdgeAuthPolicy};
pub use token::DEV_SESSION_SECRET;
