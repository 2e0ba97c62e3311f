use async_trait::async_trait;

use super::{Pet, PetData};
use crate::domain::DomainResult;

#[async_trait]
pub trait PetRepository: Send + Sync {
    /// All pets, ordered by id.
    async fn list(&self) -> DomainResult<Vec<Pet>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Pet>>;
    async fn insert(&self, data: PetData) -> DomainResult<Pet>;

    /// `None` when no pet has `id`.
    async fn update(&self, id: i32, data: PetData) -> DomainResult<Option<Pet>>;

    /// Returns `false` when no pet has `id`.
    async fn delete(&self, id: i32) -> DomainResult<bool>;
}
