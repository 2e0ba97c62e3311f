//! User management service
//!
//! HTTP handlers are thin wrappers that delegate to this service; it turns
//! repository absence (`None` / `false`) into [`DomainError::UserNotFound`].

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, DomainResult, RepositoryProvider, User, UserData};

pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.repos.users().list().await
    }

    pub async fn retrieve(&self, id: i32) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound)
    }

    /// Insert a user whose email has already been checked by validation.
    pub async fn create(&self, data: UserData) -> DomainResult<User> {
        let user = self.repos.users().insert(data).await?;
        info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub async fn update(&self, id: i32, data: UserData) -> DomainResult<User> {
        let user = self
            .repos
            .users()
            .update(id, data)
            .await?
            .ok_or(DomainError::UserNotFound)?;
        info!(user_id = id, "User updated");
        Ok(user)
    }

    /// Delete the user and, in the same transaction, every pet it owns.
    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        if !self.repos.users().delete_with_pets(id).await? {
            return Err(DomainError::UserNotFound);
        }
        info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Whether a user other than `exclude_id` already has `email`.
    pub async fn user_exists(&self, email: &str, exclude_id: Option<i32>) -> DomainResult<bool> {
        self.repos.users().email_taken(email, exclude_id).await
    }
}
