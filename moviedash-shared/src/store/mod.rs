/// Credential store
///
/// The request handlers talk to user records only through the [`UserStore`]
/// trait, so the backing collection can be swapped without touching them.
///
/// # Backends
///
/// - [`PgUserStore`]: PostgreSQL via `sqlx`
/// - [`MemoryUserStore`]: process-local vector, for development and tests
///
/// # Duplicate emails
///
/// `insert` never checks for an existing email. Callers perform a
/// `find_by_email` first; two concurrent signups for the same address can both
/// pass that check.

use crate::models::user::{CreateUser, User};
use async_trait::async_trait;

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

/// Errors raised by a credential store backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database rejected or failed the query
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// The backend could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    /// Connection-level failures become `Unavailable`; everything else is a
    /// query failure.
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// A collection of user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Short backend name for logs and health output
    fn name(&self) -> &str;

    /// Returns every record whose email equals `email` exactly
    ///
    /// An empty vector means no match; it is not an error.
    async fn find_by_email(&self, email: &str) -> StoreResult<Vec<User>>;

    /// Appends a new record and returns it with its assigned id
    async fn insert(&self, data: CreateUser) -> StoreResult<User>;

    /// Verifies the backend is reachable
    async fn ping(&self) -> StoreResult<()>;
}
