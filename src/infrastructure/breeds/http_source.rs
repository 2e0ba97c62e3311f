//! Breed catalogue fetched over HTTP
//!
//! The catalogue is a static JSON file served by this very process under the
//! static-files mount, so the source only needs a base URL and a path.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::domain::{BreedCatalogue, BreedSource, DomainError, DomainResult};

pub struct HttpBreedSource {
    client: Client,
    path: String,
}

impl HttpBreedSource {
    pub fn new(path: impl Into<String>, timeout: Duration) -> DomainResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::BreedsUnavailable(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            path: path.into(),
        })
    }

    fn url(&self, base_url: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl BreedSource for HttpBreedSource {
    async fn fetch(&self, base_url: &str) -> DomainResult<BreedCatalogue> {
        let url = self.url(base_url);
        debug!(%url, "Fetching breed catalogue");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(%url, error = %e, "Breed catalogue request failed");
            DomainError::BreedsUnavailable("Breeds file not found".to_string())
        })?;

        if response.status() != StatusCode::OK {
            warn!(%url, status = %response.status(), "Breed catalogue unavailable");
            return Err(DomainError::BreedsUnavailable(
                "Breeds file not found".to_string(),
            ));
        }

        response.json::<BreedCatalogue>().await.map_err(|e| {
            warn!(%url, error = %e, "Breed catalogue is not valid JSON");
            DomainError::BreedsUnavailable("Breeds file is malformed".to_string())
        })
    }
}
