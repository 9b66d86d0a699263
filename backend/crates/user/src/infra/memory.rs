//! In-Memory Repository Implementation

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::ids::UserId;
use crate::error::UserResult;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of (active, deleted) users
    pub async fn counts(&self) -> (usize, usize) {
        let users = self.users.read().await;
        let deleted = users.values().filter(|u| u.deleted).count();
        (users.len() - deleted, deleted)
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn find_user(&self, id: &UserId) -> UserResult<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let email = email.to_lowercase();
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| !u.deleted && u.email.as_deref() == Some(email.as_str()))
            .cloned())
    }

    async fn save_user(&self, user: &User) -> UserResult<()> {
        self.users.write().await.insert(user.id, user.clone());
        Ok(())
    }
}
