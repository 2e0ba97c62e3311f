//! Breeds module: static breed catalogue lookup

pub mod handlers;

pub use handlers::*;
