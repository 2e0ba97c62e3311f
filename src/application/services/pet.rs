//! Pet management service

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, DomainResult, Pet, PetData, RepositoryProvider};

pub struct PetService {
    repos: Arc<dyn RepositoryProvider>,
}

impl PetService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list(&self) -> DomainResult<Vec<Pet>> {
        self.repos.pets().list().await
    }

    pub async fn retrieve(&self, id: i32) -> DomainResult<Pet> {
        self.repos
            .pets()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PetNotFound)
    }

    /// Insert a pet whose owner has already been checked by validation.
    pub async fn create(&self, data: PetData) -> DomainResult<Pet> {
        let pet = self.repos.pets().insert(data).await?;
        info!(pet_id = pet.id, owner_id = pet.owner_id, "Pet created");
        Ok(pet)
    }

    pub async fn update(&self, id: i32, data: PetData) -> DomainResult<Pet> {
        let pet = self
            .repos
            .pets()
            .update(id, data)
            .await?
            .ok_or(DomainError::PetNotFound)?;
        info!(pet_id = id, "Pet updated");
        Ok(pet)
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        if !self.repos.pets().delete(id).await? {
            return Err(DomainError::PetNotFound);
        }
        info!(pet_id = id, "Pet deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserData;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::test_database;

    async fn setup() -> (PetService, i32) {
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(test_database().await));
        let owner = repos
            .users()
            .insert(UserData {
                name: "John Doe".into(),
                email: "john@doe.com".into(),
            })
            .await
            .unwrap();
        (PetService::new(repos), owner.id)
    }

    fn oreo(owner_id: i32) -> PetData {
        PetData {
            name: "Oreo".into(),
            breed: "Mutt".into(),
            age: 3,
            owner_id,
        }
    }

    #[tokio::test]
    async fn create_then_list_in_id_order() {
        let (service, owner_id) = setup().await;
        let first = service.create(oreo(owner_id)).await.unwrap();
        let second = service
            .create(PetData {
                name: "Max".into(),
                breed: "Labrador".into(),
                age: 5,
                owner_id,
            })
            .await
            .unwrap();

        assert_eq!(service.list().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn missing_pet_is_not_found() {
        let (service, owner_id) = setup().await;
        assert!(matches!(service.retrieve(1).await, Err(DomainError::PetNotFound)));
        assert!(matches!(
            service.update(1, oreo(owner_id)).await,
            Err(DomainError::PetNotFound)
        ));
        assert!(matches!(service.delete(1).await, Err(DomainError::PetNotFound)));
    }

    #[tokio::test]
    async fn delete_removes_only_that_pet() {
        let (service, owner_id) = setup().await;
        let first = service.create(oreo(owner_id)).await.unwrap();
        let second = service.create(oreo(owner_id)).await.unwrap();

        service.delete(first.id).await.unwrap();

        assert!(matches!(service.retrieve(first.id).await, Err(DomainError::PetNotFound)));
        assert_eq!(service.retrieve(second.id).await.unwrap(), second);
    }
}
