use async_trait::async_trait;

use super::{User, UserData};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, ordered by id.
    async fn list(&self) -> DomainResult<Vec<User>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>>;
    async fn insert(&self, data: UserData) -> DomainResult<User>;

    /// Overwrite a user's fields. `None` when no user has `id`.
    async fn update(&self, id: i32, data: UserData) -> DomainResult<Option<User>>;

    /// Delete the user and every pet it owns in one transaction.
    /// Returns `false` when no user has `id`.
    async fn delete_with_pets(&self, id: i32) -> DomainResult<bool>;

    /// Whether a user other than `exclude_id` already uses `email`.
    async fn email_taken(&self, email: &str, exclude_id: Option<i32>) -> DomainResult<bool>;
}
