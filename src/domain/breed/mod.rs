//! Breed catalogue port
//!
//! The catalogue is a JSON object mapping an animal key (`dog`, `cat`, ...)
//! to its list of breed names.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::DomainResult;

pub type BreedCatalogue = HashMap<String, Vec<String>>;

#[async_trait]
pub trait BreedSource: Send + Sync {
    /// Load the full catalogue relative to `base_url`.
    async fn fetch(&self, base_url: &str) -> DomainResult<BreedCatalogue>;
}
