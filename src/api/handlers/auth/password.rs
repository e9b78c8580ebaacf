//! Password hashing with Argon2id.

use anyhow::{Result, anyhow};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;

/// Hash a password with a fresh random salt, returning the PHC string.
///
/// # Errors
/// Returns an error if hashing fails.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| anyhow!("Failed to hash password: {err}"))?;

    Ok(hash.to_string())
}

/// Check a password against a stored PHC string.
///
/// A malformed stored hash counts as a mismatch.
#[must_use]
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    PasswordHash::new(password_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};

    #[test]
    fn round_trip() {
        let hash = hash_password("hunter2").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("hunter2", &hash));
    }

    #[test]
    fn wrong_password_rejected() {
        let hash = hash_password("hunter2").expect("hashing should succeed");
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn distinct_salts() {
        let first = hash_password("hunter2").expect("hashing should succeed");
        let second = hash_password("hunter2").expect("hashing should succeed");
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_hash_is_mismatch() {
        assert!(!verify_password("hunter2", "not-a-phc-string"));
    }
}
