//! In-process application for HTTP tests: real router, real services,
//! in-memory SQLite and a fixed breed catalogue.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::Service;

use super::router::{create_api_router, AppState};
use crate::application::{BreedsService, PetService, UserService};
use crate::config::StaticFilesConfig;
use crate::domain::{BreedCatalogue, BreedSource, DomainError, DomainResult, RepositoryProvider};
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
use crate::infrastructure::database::test_database;

/// Base URL the test router is configured with.
pub(crate) const CATALOGUE_BASE_URL: &str = "http://catalogue.test/";

/// Serves a fixed catalogue, but only from [`CATALOGUE_BASE_URL`].
pub(crate) struct StubBreedSource(Option<BreedCatalogue>);

impl StubBreedSource {
    pub(crate) fn catalogue() -> BreedCatalogue {
        let list = |names: &[&str]| names.iter().map(|n| n.to_string()).collect::<Vec<_>>();
        BreedCatalogue::from([
            (
                "dog".to_string(),
                list(&["Mixed Breed", "Labrador", "Golden Retriever", "Poodle"]),
            ),
            (
                "cat".to_string(),
                list(&[
                    "Domestic Shorthair",
                    "Abyssinian",
                    "American Bobtail",
                    "American Curl",
                ]),
            ),
        ])
    }
}

#[async_trait]
impl BreedSource for StubBreedSource {
    async fn fetch(&self, base_url: &str) -> DomainResult<BreedCatalogue> {
        self.0
            .clone()
            .filter(|_| base_url == CATALOGUE_BASE_URL)
            .ok_or_else(|| DomainError::BreedsUnavailable("Breeds file not found".to_string()))
    }
}

pub(crate) struct TestApp {
    router: Router,
}

impl TestApp {
    pub(crate) async fn new() -> Self {
        Self::with_source(StubBreedSource(Some(StubBreedSource::catalogue()))).await
    }

    /// App whose breed catalogue cannot be loaded.
    pub(crate) async fn without_breeds() -> Self {
        Self::with_source(StubBreedSource(None)).await
    }

    async fn with_source(source: StubBreedSource) -> Self {
        let db = test_database().await;
        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db));

        let state = AppState::new(
            Arc::new(UserService::new(repos.clone())),
            Arc::new(PetService::new(repos.clone())),
            Arc::new(BreedsService::new(Arc::new(source))),
            repos,
            CATALOGUE_BASE_URL.to_string(),
        );

        Self {
            router: create_api_router(state, &StaticFilesConfig::default()),
        }
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(path);
        self.send_request(builder, body).await
    }

    async fn send_request(
        &self,
        mut builder: axum::http::request::Builder,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let mut router = self.router.clone();
        let response = router
            .call(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub(crate) async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.send(Method::GET, path, None).await
    }

    pub(crate) async fn get_with_host(&self, path: &str, host: &str) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(Method::GET)
            .uri(path)
            .header(header::HOST, host);
        self.send_request(builder, None).await
    }

    pub(crate) async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> StatusCode {
        self.send(Method::DELETE, path, None).await.0
    }

    pub(crate) async fn create_user(&self, name: &str, email: &str) -> Value {
        let (status, body) = self
            .post("/user", json!({"name": name, "email": email}))
            .await;
        assert_eq!(status, StatusCode::OK, "create user failed: {body}");
        body
    }

    pub(crate) async fn create_pet(&self, name: &str, owner_id: i32) -> Value {
        let (status, body) = self
            .post(
                "/pet",
                json!({"name": name, "breed": "Mutt", "age": 3, "owner": {"id": owner_id}}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create pet failed: {body}");
        body
    }
}
