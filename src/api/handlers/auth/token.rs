//! Session tokens: HS256 JWTs carrying the signed-in user.

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
    get_current_timestamp,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::AuthState;

/// Built-in development signing key, only used behind the
/// `--insecure-dev-secret` opt-in.
pub const DEV_SESSION_SECRET: &str = "your-secret-key";

/// Claims carried by a session token.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SessionClaims {
    pub id: String,
    pub email: String,
    pub name: String,
    pub iat: u64,
    pub exp: u64,
}

/// Outcome of verifying a presented token.
#[derive(Debug, PartialEq)]
pub enum TokenOutcome {
    Valid(SessionClaims),
    Expired,
    Malformed,
}

/// Sign a session token for the given user.
///
/// # Errors
/// Returns an error if JWT encoding fails.
pub fn sign_session(
    id: Uuid,
    email: &str,
    name: &str,
    state: &AuthState,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = get_current_timestamp();
    let ttl = u64::try_from(state.config().session_ttl_seconds()).unwrap_or(0);

    let claims = SessionClaims {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        iat,
        exp: iat + ttl,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.session_secret().expose_secret().as_bytes()),
    )
}

/// Verify a presented token against the session secret.
///
/// Expiry is checked with the validator's default leeway. Anything that is
/// not a well-formed, correctly signed token with our claims comes back as
/// [`TokenOutcome::Malformed`].
#[must_use]
pub fn verify_session(token: &str, state: &AuthState) -> TokenOutcome {
    let key = DecodingKey::from_secret(state.session_secret().expose_secret().as_bytes());
    let validation = Validation::new(Algorithm::HS256);

    match decode::<SessionClaims>(token, &key, &validation) {
        Ok(data) => TokenOutcome::Valid(data.claims),
        Err(err) => match err.kind() {
            ErrorKind::ExpiredSignature => TokenOutcome::Expired,
            _ => TokenOutcome::Malformed,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::auth::state::AuthConfig;
    use secrecy::SecretString;

    fn test_state(secret: &str) -> AuthState {
        AuthState::new(
            AuthConfig::new("http://localhost:3000".to_string()),
            SecretString::from(secret.to_string()),
        )
    }

    #[test]
    fn round_trip() {
        let state = test_state("sushi");
        let id = Uuid::new_v4();
        let token =
            sign_session(id, "jane@example.com", "Jane", &state).expect("signing should succeed");

        match verify_session(&token, &state) {
            TokenOutcome::Valid(claims) => {
                assert_eq!(claims.id, id.to_string());
                assert_eq!(claims.email, "jane@example.com");
                assert_eq!(claims.name, "Jane");
                assert_eq!(claims.exp - claims.iat, 604_800);
            }
            outcome => panic!("expected Valid, got {outcome:?}"),
        }
    }

    #[test]
    fn ttl_override() {
        let state = AuthState::new(
            AuthConfig::new("http://localhost:3000".to_string()).with_session_ttl_seconds(3600),
            SecretString::from("sushi".to_string()),
        );
        let token = sign_session(Uuid::new_v4(), "jane@example.com", "Jane", &state)
            .expect("signing should succeed");

        match verify_session(&token, &state) {
            TokenOutcome::Valid(claims) => assert_eq!(claims.exp - claims.iat, 3600),
            outcome => panic!("expected Valid, got {outcome:?}"),
        }
    }

    #[test]
    fn expired_token() {
        let state = test_state("sushi");
        let iat = get_current_timestamp() - 7200;
        let claims = SessionClaims {
            id: Uuid::new_v4().to_string(),
            email: "jane@example.com".to_string(),
            name: "Jane".to_string(),
            iat,
            // One hour past, well beyond the validator leeway
            exp: iat + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"sushi"),
        )
        .expect("encoding should succeed");

        assert_eq!(verify_session(&token, &state), TokenOutcome::Expired);
    }

    #[test]
    fn tampered_signature() {
        let state = test_state("sushi");
        let token_a = sign_session(Uuid::new_v4(), "a@example.com", "A", &state)
            .expect("signing should succeed");
        let token_b = sign_session(Uuid::new_v4(), "b@example.com", "B", &state)
            .expect("signing should succeed");

        let (head_a, _) = token_a.rsplit_once('.').expect("token has a signature");
        let (_, sig_b) = token_b.rsplit_once('.').expect("token has a signature");
        let franken = format!("{head_a}.{sig_b}");

        assert_eq!(verify_session(&franken, &state), TokenOutcome::Malformed);
    }

    #[test]
    fn wrong_secret() {
        let state = test_state("sushi");
        let other = test_state("sashimi");
        let token = sign_session(Uuid::new_v4(), "jane@example.com", "Jane", &state)
            .expect("signing should succeed");

        assert_eq!(verify_session(&token, &other), TokenOutcome::Malformed);
    }

    #[test]
    fn garbage_token() {
        let state = test_state("sushi");
        assert_eq!(
            verify_session("not-a-token", &state),
            TokenOutcome::Malformed
        );
        assert_eq!(verify_session("", &state), TokenOutcome::Malformed);
    }
}
