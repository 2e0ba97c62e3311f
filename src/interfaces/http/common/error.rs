//! Error bodies and the `DomainError` -> HTTP response mapping
//!
//! Two body shapes are produced:
//!
//! - not-found / internal: a JSON array of `{type, msg, loc}` with
//!   `loc = ["__model__"]`;
//! - field validation: `{"errorList": [{loc, type, msg}, ...]}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{DomainError, FieldError};

/// Location used for errors that concern the whole resource.
pub const MODEL_LOC: &str = "__model__";

/// Model-scoped error entry (404 / 500 bodies).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ModelErrorDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub msg: String,
    pub loc: Vec<String>,
}

impl ModelErrorDto {
    fn new(kind: &str, msg: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            msg: msg.into(),
            loc: vec![MODEL_LOC.to_string()],
        }
    }
}

/// Field-scoped error entry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    pub loc: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub msg: String,
}

impl From<FieldError> for FieldErrorDto {
    fn from(e: FieldError) -> Self {
        Self {
            loc: e.loc,
            kind: e.kind,
            msg: e.msg,
        }
    }
}

/// 400 body for payload validation failures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorListResponse {
    pub error_list: Vec<FieldErrorDto>,
}

impl ErrorListResponse {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self {
            error_list: errors.into_iter().map(FieldErrorDto::from).collect(),
        }
    }
}

/// Body returned when the breed catalogue cannot be loaded.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpstreamErrorResponse {
    pub error: String,
}

/// Handler error: wraps a [`DomainError`] and renders it as a response.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.code();
        match self.0 {
            e @ (DomainError::UserNotFound | DomainError::PetNotFound) => (
                StatusCode::NOT_FOUND,
                Json(vec![ModelErrorDto::new(code, e.to_string())]),
            )
                .into_response(),
            DomainError::FieldValidation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorListResponse::new(errors)),
            )
                .into_response(),
            // Kept as 404 for compatibility with existing clients.
            DomainError::BreedsUnavailable(msg) => (
                StatusCode::NOT_FOUND,
                Json(UpstreamErrorResponse { error: msg }),
            )
                .into_response(),
            DomainError::Database(msg) => {
                error!(error = %msg, "Database failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(vec![ModelErrorDto::new(code, "Internal server error")]),
                )
                    .into_response()
            }
        }
    }
}
