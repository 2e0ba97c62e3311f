//! Pet CRUD handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{PetDto, PetRequest};
use crate::application::{PayloadRules, PetService};
use crate::interfaces::http::common::{
    ApiError, ErrorListResponse, ModelErrorDto, ValidatedJson,
};

#[derive(Clone)]
pub struct PetHandlerState {
    pub pet_service: Arc<PetService>,
    pub rules: PayloadRules,
}

#[utoipa::path(
    get,
    path = "/pet",
    tag = "Pets",
    responses(
        (status = 200, description = "All pets", body = Vec<PetDto>)
    )
)]
pub async fn list_pets(State(state): State<PetHandlerState>) -> Result<Json<Vec<PetDto>>, ApiError> {
    let pets = state.pet_service.list().await?;
    Ok(Json(pets.into_iter().map(PetDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/pet/{id}",
    tag = "Pets",
    params(("id" = i32, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Pet details", body = PetDto),
        (status = 404, description = "Not found", body = Vec<ModelErrorDto>)
    )
)]
pub async fn get_pet(
    State(state): State<PetHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<PetDto>, ApiError> {
    let pet = state.pet_service.retrieve(id).await?;
    Ok(Json(PetDto::from(pet)))
}

#[utoipa::path(
    post,
    path = "/pet",
    tag = "Pets",
    request_body = PetRequest,
    responses(
        (status = 200, description = "Pet created", body = PetDto),
        (status = 400, description = "Validation error", body = ErrorListResponse)
    )
)]
pub async fn create_pet(
    State(state): State<PetHandlerState>,
    ValidatedJson(request): ValidatedJson<PetRequest>,
) -> Result<Json<PetDto>, ApiError> {
    state.rules.check_pet(request.owner.id).await?;

    let pet = state.pet_service.create(request.into()).await?;
    Ok(Json(PetDto::from(pet)))
}

#[utoipa::path(
    put,
    path = "/pet/{id}",
    tag = "Pets",
    params(("id" = i32, Path, description = "Pet ID")),
    request_body = PetRequest,
    responses(
        (status = 200, description = "Pet updated", body = PetDto),
        (status = 400, description = "Validation error", body = ErrorListResponse),
        (status = 404, description = "Not found", body = Vec<ModelErrorDto>)
    )
)]
pub async fn update_pet(
    State(state): State<PetHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<PetRequest>,
) -> Result<Json<PetDto>, ApiError> {
    state.rules.check_pet(request.owner.id).await?;

    let pet = state.pet_service.update(id, request.into()).await?;
    Ok(Json(PetDto::from(pet)))
}

#[utoipa::path(
    delete,
    path = "/pet/{id}",
    tag = "Pets",
    params(("id" = i32, Path, description = "Pet ID")),
    responses(
        (status = 204, description = "Pet deleted"),
        (status = 404, description = "Not found", body = Vec<ModelErrorDto>)
    )
)]
pub async fn delete_pet(
    State(state): State<PetHandlerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.pet_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
