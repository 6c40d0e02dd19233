/// User model and database operations
///
/// Users are created once and never updated or deleted by this service.
/// Known fields are columns; any additional caller-supplied body fields
/// land in the `extra` JSONB column and are returned verbatim.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name TEXT NOT NULL,
///     email TEXT NOT NULL,
///     extra JSONB NOT NULL DEFAULT '{}',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
///
/// CREATE UNIQUE INDEX users_name_email_key ON users (name, email);
/// ```
///
/// The unique index on `(name, email)` is the duplicate-user check: an
/// insert of an existing pair fails with a unique violation instead of
/// requiring a read-then-insert round trip, so two concurrent identical
/// requests cannot both land.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use sqlx::PgPool;
use uuid::Uuid;

/// User document
///
/// `extra` is flattened on the wire, so a stored `{"role": "admin"}`
/// comes back as a top-level `role` field.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Store-generated identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address, the foreign key tasks point at
    pub email: String,

    /// Caller-supplied fields outside the known set
    #[serde(flatten)]
    pub extra: JsonValue,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new user
///
/// Unknown body fields are collected into `extra` and stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl User {
    /// Inserts a new user document
    ///
    /// # Errors
    ///
    /// Returns an error if the `(name, email)` pair already exists
    /// (unique violation) or the database operation fails. Callers
    /// translate the unique violation into the "already exists"
    /// response.
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, extra)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, extra, created_at, updated_at
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(JsonValue::Object(data.extra))
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Counts stored users with the given identity pair
    ///
    /// At most 1 while the unique index holds; used by tests to assert
    /// duplicate suppression.
    pub async fn count_by_identity(
        pool: &PgPool,
        name: &str,
        email: &str,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM users WHERE name = $1 AND email = $2")
                .bind(name)
                .bind(email)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_user_collects_unknown_fields() {
        let body = json!({
            "name": "Jane",
            "email": "jane@example.com",
            "avatar": "https://example.com/a.png",
            "team": "platform"
        });

        let data: CreateUser = serde_json::from_value(body).unwrap();
        assert_eq!(data.name, "Jane");
        assert_eq!(data.email, "jane@example.com");
        assert_eq!(data.extra["avatar"], "https://example.com/a.png");
        assert_eq!(data.extra["team"], "platform");
    }

    #[test]
    fn test_create_user_without_extra_fields() {
        let body = json!({"name": "Jane", "email": "jane@example.com"});

        let data: CreateUser = serde_json::from_value(body).unwrap();
        assert!(data.extra.is_empty());
    }

    #[test]
    fn test_user_serializes_extra_at_top_level() {
        let user = User {
            id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            extra: json!({"role": "admin"}),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "admin");
        assert!(json.get("extra").is_none());
    }
}
