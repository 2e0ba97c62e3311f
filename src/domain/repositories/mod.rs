//! Repository access for the domain layer

use async_trait::async_trait;

use super::pet::PetRepository;
use super::user::UserRepository;

pub use crate::shared::errors::DomainResult;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let user = repos.users().find_by_id(1).await?;
///     let pets = repos.pets().list().await?;
/// }
/// ```
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn pets(&self) -> &dyn PetRepository;

    /// Round-trip to the backing store.
    async fn ping(&self) -> DomainResult<()>;
}
