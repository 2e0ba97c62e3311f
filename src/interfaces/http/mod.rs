//! HTTP REST API interfaces
//!
//! - `common`: error bodies and the validating JSON extractor
//! - `modules`: handlers per resource (users, pets, breeds, health)
//! - `request_id`: correlation id middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod request_id;
pub mod router;

#[cfg(test)]
pub(crate) mod test_support;

pub use router::{create_api_router, ApiDoc, AppState};
