//! User CRUD handlers
//!
//! Thin wrappers over `UserService`; email uniqueness is checked by
//! `PayloadRules` before create/update reach the service.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateUserRequest, UpdateUserRequest, UserDto};
use crate::application::{PayloadRules, UserService};
use crate::interfaces::http::common::{
    ApiError, ErrorListResponse, ModelErrorDto, ValidatedJson,
};

#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService>,
    pub rules: PayloadRules,
}

#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>)
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.user_service.list().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 404, description = "Not found", body = Vec<ModelErrorDto>)
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.user_service.retrieve(id).await?;
    Ok(Json(UserDto::from(user)))
}

#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserDto),
        (status = 400, description = "Validation error", body = ErrorListResponse)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<Json<UserDto>, ApiError> {
    state.rules.check_new_user(&request.email).await?;

    let user = state.user_service.create(request.into()).await?;
    Ok(Json(UserDto::from(user)))
}

#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Validation error", body = ErrorListResponse),
        (status = 404, description = "Not found", body = Vec<ModelErrorDto>)
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserDto>, ApiError> {
    state.rules.check_user_update(id, &request.email).await?;

    let user = state.user_service.update(id, request.into()).await?;
    Ok(Json(UserDto::from(user)))
}

#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User and owned pets deleted"),
        (status = 404, description = "Not found", body = Vec<ModelErrorDto>)
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
