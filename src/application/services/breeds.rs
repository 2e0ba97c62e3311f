//! Breed lookup service

use std::sync::Arc;

use crate::domain::{BreedSource, DomainResult};

pub struct BreedsService {
    source: Arc<dyn BreedSource>,
}

impl BreedsService {
    pub fn new(source: Arc<dyn BreedSource>) -> Self {
        Self { source }
    }

    /// Breeds listed for `animal`; empty when the catalogue has no such key.
    /// Fails only when the catalogue itself cannot be loaded.
    pub async fn list_by_breed(&self, base_url: &str, animal: &str) -> DomainResult<Vec<String>> {
        let mut catalogue = self.source.fetch(base_url).await?;
        Ok(catalogue.remove(animal).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BreedCatalogue, DomainError};
    use async_trait::async_trait;

    struct StaticSource(Option<BreedCatalogue>);

    #[async_trait]
    impl BreedSource for StaticSource {
        async fn fetch(&self, _base_url: &str) -> DomainResult<BreedCatalogue> {
            self.0
                .clone()
                .ok_or_else(|| DomainError::BreedsUnavailable("Breeds file not found".into()))
        }
    }

    fn service(catalogue: Option<BreedCatalogue>) -> BreedsService {
        BreedsService::new(Arc::new(StaticSource(catalogue)))
    }

    fn catalogue() -> BreedCatalogue {
        BreedCatalogue::from([(
            "dog".to_string(),
            vec!["Labrador".to_string(), "Poodle".to_string()],
        )])
    }

    #[tokio::test]
    async fn known_animal_returns_its_list() {
        let breeds = service(Some(catalogue()))
            .list_by_breed("http://localhost/", "dog")
            .await
            .unwrap();
        assert_eq!(breeds, vec!["Labrador", "Poodle"]);
    }

    #[tokio::test]
    async fn unknown_animal_returns_empty_list() {
        let breeds = service(Some(catalogue()))
            .list_by_breed("http://localhost/", "dinosaur")
            .await
            .unwrap();
        assert!(breeds.is_empty());
    }

    #[tokio::test]
    async fn unavailable_catalogue_is_an_error() {
        let err = service(None)
            .list_by_breed("http://localhost/", "dog")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::BreedsUnavailable(_)));
    }
}
