//! Auth state and configuration.

use secrecy::SecretString;

const DEFAULT_SESSION_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

/// How the page-routing guard decides whether a request carries a session.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EdgeAuthPolicy {
    /// A token cookie or bearer header counts, signature unchecked.
    #[default]
    Optimistic,
    /// The token must verify as a live session.
    Strict,
}

impl EdgeAuthPolicy {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "optimistic" => Some(Self::Optimistic),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    frontend_base_url: String,
    session_ttl_seconds: i64,
    edge_auth_policy: EdgeAuthPolicy,
}

impl AuthConfig {
    #[must_use]
    pub fn new(frontend_base_url: String) -> Self {
        Self {
            frontend_base_url,
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
            edge_auth_policy: EdgeAuthPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_session_ttl_seconds(mut self, seconds: i64) -> Self {
        self.session_ttl_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_edge_auth_policy(mut self, policy: EdgeAuthPolicy) -> Self {
        self.edge_auth_policy = policy;
        self
    }

    pub(crate) fn frontend_base_url(&self) -> &str {
        &self.frontend_base_url
    }

    pub(crate) fn edge_auth_policy(&self) -> EdgeAuthPolicy {
        self.edge_auth_policy
    }

    pub(super) fn session_ttl_seconds(&self) -> i64 {
        self.session_ttl_seconds
    }
}

pub struct AuthState {
    config: AuthConfig,
    session_secret: SecretString,
}

impl AuthState {
    #[must_use]
    pub fn new(config: AuthConfig, session_secret: SecretString) -> Self {
        Self {
            config,
            session_secret,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub(super) fn session_secret(&self) -> &SecretString {
        &self.session_secret
    }
}
