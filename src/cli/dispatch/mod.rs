//! Command-line argument dispatch and server initialization.
//!
//! This module parses validated CLI arguments and maps them to the appropriate
//! action, such as starting the API server with its full configuration state.

use crate::api::handlers::auth::{DEV_SESSION_SECRET, EdgeAuthPolicy};
use crate::cli::actions::{Action, server::Args};
use anyhow::{Context, Result, bail};
use secrecy::SecretString;
use std::path::PathBuf;
use tracing::warn;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let dsn = matches
        .get_one::<String>("dsn")
        .cloned()
        .context("missing required argument: --dsn")?;

    let session_secret = match matches.get_one::<String>("session-secret") {
        Some(secret) => SecretString::from(secret.clone()),
        None => {
            if matches.get_flag("insecure-dev-secret") {
                warn!("Using the built-in development session secret; tokens are forgeable");
                SecretString::from(DEV_SESSION_SECRET.to_string())
            } else {
                bail!(
                    "missing required argument: --session-secret (or pass --insecure-dev-secret to run with the built-in development key)"
                );
            }
        }
    };

    let session_ttl_seconds = matches
        .get_one::<i64>("session-ttl-seconds")
        .copied()
        .unwrap_or(604_800);

    let frontend_base_url = matches
        .get_one::<String>("frontend-base-url")
        .cloned()
        .unwrap_or_else(|| "http://localhost:3000".to_string());

    let edge_auth_policy = matches
        .get_one::<String>("edge-auth-policy")
        .map(String::as_str)
        .and_then(EdgeAuthPolicy::parse)
        .unwrap_or_default();

    let web_root = matches.get_one::<String>("web-root").map(PathBuf::from);

    Ok(Action::Server(Args {
        port,
        dsn,
        session_secret,
        session_ttl_seconds,
        frontend_base_url,
        edge_auth_policy,
        web_root,
    }))
}
