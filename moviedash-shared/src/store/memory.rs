/// In-memory credential store
///
/// Records live only as long as the process. Used when no database is
/// configured and as the store in tests.

use super::{StoreResult, UserStore};
use crate::models::user::{CreateUser, User};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// [`UserStore`] backed by a vector behind an async lock
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Copy of every stored record, in insertion order
    pub async fn all(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.iter().filter(|u| u.email == email).cloned().collect())
    }

    async fn insert(&self, data: CreateUser) -> StoreResult<User> {
        let user = User::from_create(data);
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
