//! Breed lookup handler

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::BreedsService;
use crate::interfaces::http::common::{ApiError, UpstreamErrorResponse};

#[derive(Clone)]
pub struct BreedsHandlerState {
    pub breeds_service: Arc<BreedsService>,
    /// Base URL the catalogue is fetched from. Fixed at startup.
    pub base_url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BreedsResponse {
    pub data: Vec<String>,
}

/// List breeds by animal
///
/// The shipped catalogue knows dog, cat, bird, fish, reptile, rabbit and hamster.
#[utoipa::path(
    get,
    path = "/breeds/{animal}",
    tag = "Breeds",
    params(("animal" = String, Path, description = "Animal key, e.g. `dog`")),
    responses(
        (status = 200, description = "Breeds for the animal (empty when unknown)", body = BreedsResponse),
        (status = 404, description = "Breed catalogue unavailable", body = UpstreamErrorResponse)
    )
)]
pub async fn list_breeds(
    State(state): State<BreedsHandlerState>,
    Path(animal): Path<String>,
) -> Result<Json<BreedsResponse>, ApiError> {
    let data = state
        .breeds_service
        .list_by_breed(&state.base_url, &animal)
        .await?;
    Ok(Json(BreedsResponse { data }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::interfaces::http::test_support::TestApp;

    #[tokio::test]
    async fn known_animal_returns_configured_list() {
        let app = TestApp::new().await;

        let (status, body) = app.get("/breeds/dog").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"data": ["Mixed Breed", "Labrador", "Golden Retriever", "Poodle"]})
        );
    }

    #[tokio::test]
    async fn host_header_does_not_change_catalogue_location() {
        let app = TestApp::new().await;

        let (status, body) = app
            .get_with_host("/breeds/cat", "other.example:9999")
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0], "Domestic Shorthair");
    }

    #[tokio::test]
    async fn unknown_animal_returns_empty_list() {
        let app = TestApp::new().await;

        let (status, body) = app.get("/breeds/dinosaur").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"data": []}));
    }

    #[tokio::test]
    async fn unavailable_catalogue_is_reported_as_not_found() {
        let app = TestApp::without_breeds().await;

        let (status, body) = app.get("/breeds/dog").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Breeds file not found"}));
    }
}
