//! Infrastructure layer - external concerns

pub mod breeds;
pub mod database;

pub use breeds::HttpBreedSource;
pub use database::{init_database, DatabaseConfig};
