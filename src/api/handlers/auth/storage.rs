//! Database helpers for user accounts.

use anyhow::{Context, Result};
use sqlx::{PgPool, Row};
use tracing::Instrument;
use uuid::Uuid;

use super::utils::is_unique_violation;
use crate::api::handlers::types::UserResponse;

/// Outcome when attempting to create a new user.
#[derive(Debug)]
pub(super) enum RegisterOutcome {
    Created(UserAuthRow),
    EmailTaken,
}

/// Full user row including the stored password hash.
#[derive(Debug)]
pub(super) struct UserAuthRow {
    pub(super) id: Uuid,
    pub(super) email: String,
    pub(super) name: String,
    pub(super) password_hash: String,
    pub(super) bio: Option<String>,
    pub(super) avatar: Option<String>,
    pub(super) dark_mode: bool,
    pub(super) theme_color: String,
    pub(super) created_at: String,
    pub(super) updated_at: String,
}

impl UserAuthRow {
    /// Strip the password hash for responses.
    pub(super) fn into_response(self) -> UserResponse {
        UserResponse {
            id: self.id.to_string(),
            email: self.email,
            name: self.name,
            bio: self.bio,
            avatar: self.avatar,
            dark_mode: self.dark_mode,
            theme_color: self.theme_color,
            created_at: self.created_at,
            updated_at: self.updated_at,
            links: None,
        }
    }

    fn from_row(row: &sqlx::postgres::PgRow) -> Self {
        Self {
            id: row.get("id"),
            email: row.get("email"),
            name: row.get("name"),
            password_hash: row.get("password_hash"),
            bio: row.get("bio"),
            avatar: row.get("avatar"),
            dark_mode: row.get("dark_mode"),
            theme_color: row.get("theme_color"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}

pub(super) async fn insert_user(
    pool: &PgPool,
    email: &str,
    name: &str,
    password_hash: &str,
) -> Result<RegisterOutcome> {
    let query = r#"
        INSERT INTO users
            (email, name, password_hash)
        VALUES ($1, $2, $3)
        RETURNING
            id,
            email,
            name,
            password_hash,
            bio,
            avatar,
            dark_mode,
            theme_color,
            to_char(created_at AT TIME ZONE 'utc', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
            to_char(updated_at AT TIME ZONE 'utc', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at
    "#;
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .fetch_one(pool)
        .instrument(span)
        .await;

    match row {
        Ok(row) => Ok(RegisterOutcome::Created(UserAuthRow::from_row(&row))),
        Err(err) => {
            if is_unique_violation(&err) {
                return Ok(RegisterOutcome::EmailTaken);
            }
            Err(err).context("failed to insert user")
        }
    }
}

pub(super) async fn fetch_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<UserAuthRow>> {
    let query = r#"
        SELECT
            id,
            email,
            name,
            password_hash,
            bio,
            avatar,
            dark_mode,
            theme_color,
            to_char(created_at AT TIME ZONE 'utc', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
            to_char(updated_at AT TIME ZONE 'utc', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at
        FROM users
        WHERE email = $1
        LIMIT 1
    "#;
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(email)
        .fetch_optional(pool)
        .instrument(span)
        .await
        .context("failed to fetch user by email")?;

    Ok(row.map(|row| UserAuthRow::from_row(&row)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_row_response_drops_password_hash() {
        let row = UserAuthRow {
            id: Uuid::new_v4(),
            email: "jane@example.com".to_string(),
            name: "Jane".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            bio: None,
            avatar: None,
            dark_mode: false,
            theme_color: "#3B82F6".to_string(),
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
        };

        let response = row.into_response();
        let value = serde_json::to_value(&response).expect("serializable");
        assert!(value.get("password").is_none());
        assert!(value.get("passwordHash").is_none());
        assert_eq!(
            value.get("email").and_then(serde_json::Value::as_str),
            Some("jane@example.com")
        );
    }
}
