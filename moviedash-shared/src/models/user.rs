/// User model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id UUID PRIMARY KEY,
///     email TEXT NOT NULL,
///     password_hash TEXT NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// Records are created on signup and never updated or deleted.
///
/// # Example
///
/// ```no_run
/// use moviedash_shared::models::user::{User, CreateUser};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let user = User::create(
///     &pool,
///     CreateUser {
///         email: "user@example.com".to_string(),
///         password_hash: "$2b$10$...".to_string(),
///     },
/// )
/// .await?;
///
/// let matches = User::find_by_email(&pool, "user@example.com").await?;
/// assert_eq!(matches[0].id, user.id);
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Opaque identifier assigned on insert
    pub id: Uuid,

    /// Email address, compared case-sensitively exactly as stored
    pub email: String,

    /// Self-describing salted hash. Never plaintext.
    pub password_hash: String,

    /// When the record was inserted
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address
    pub email: String,

    /// Hashed password (NOT plaintext)
    pub password_hash: String,
}

impl User {
    /// Builds a record from creation data with a fresh id and timestamp
    pub fn from_create(data: CreateUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: data.email,
            password_hash: data.password_hash,
            created_at: Utc::now(),
        }
    }

    /// Inserts a new user row
    ///
    /// No duplicate check happens here; callers look the email up first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection or insert fails
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.email)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds every user whose email equals `email` exactly
    ///
    /// Returns an empty vector when nothing matches. Oldest records come first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(email)
        .fetch_all(pool)
        .await?;

        Ok(users)
    }
}
