//! User aggregate

pub mod model;
pub mod repository;

pub use model::{User, UserData};
pub use repository::UserRepository;
