/// PostgreSQL-backed credential store

use super::{StoreResult, UserStore};
use crate::{
    db::pool,
    models::user::{CreateUser, User},
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

/// [`UserStore`] over the `users` table
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Wraps an existing pool. Migrations must already have run.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    fn name(&self) -> &str {
        "postgres"
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Vec<User>> {
        let users = User::find_by_email(&self.pool, email).await?;
        debug!(email = %email, matches = users.len(), "Looked up user by email");
        Ok(users)
    }

    async fn insert(&self, data: CreateUser) -> StoreResult<User> {
        let user = User::create(&self.pool, data).await?;
        debug!(user_id = %user.id, "Inserted user");
        Ok(user)
    }

    async fn ping(&self) -> StoreResult<()> {
        pool::health_check(&self.pool).await?;
        Ok(())
    }
}
