//! # Linkbio (link-in-bio API)
//!
//! `linkbio` is the backend for a link-in-bio profile service. Authenticated
//! users manage a personal profile and an ordered list of outbound links;
//! visitors load a public profile and click through, with clicks counted for
//! analytics.
//!
//! ## Sessions
//!
//! Authentication is a stateless HS256 JWT carrying `{id, email, name}` with a
//! seven-day expiry. The token travels either as `Authorization: Bearer` or as
//! an `HttpOnly` cookie named `token`; there is no server-side session table,
//! so logout only clears the cookie.
//!
//! ## Ownership
//!
//! Links belong to the user that created them. Mutations check ownership
//! inline (fetch, 404 on missing, 403 on foreign) and the bulk reorder scopes
//! every update by owner id inside one transaction.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
