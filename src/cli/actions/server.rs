use crate::api::{
    self,
    handlers::auth::{AuthConfig, AuthState, EdgeAuthPolicy},
};
use anyhow::Result;
use secrecy::SecretString;
use std::{path::PathBuf, sync::Arc};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dsn: String,
    pub session_secret: SecretString,
    pub session_ttl_seconds: i64,
    pub frontend_base_url: String,
    pub edge_auth_policy: EdgeAuthPolicy,
    pub web_root: Option<PathBuf>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the listener cannot bind or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let auth_config = AuthConfig::new(args.frontend_base_url)
        .with_session_ttl_seconds(args.session_ttl_seconds)
        .with_edge_auth_policy(args.edge_auth_policy);

    let auth_state = Arc::new(AuthState::new(auth_config, args.session_secret));

    api::new(args.port, args.dsn, auth_state, args.web_root).await
}
