//! # Pets Service
//!
//! HTTP backend for managing users and the pets they own, plus a breed
//! lookup backed by a static JSON catalogue.
//!
//! ## Architecture
//!
//! - **domain**: entities and repository / breed source ports
//! - **application**: services and cross-entity payload rules
//! - **infrastructure**: SeaORM persistence and the HTTP breed source
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: process lifecycle (startup, tracing, graceful shutdown)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
