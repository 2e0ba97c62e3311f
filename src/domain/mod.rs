pub mod breed;
pub mod pet;
pub mod repositories;
pub mod user;

// Re-export commonly used types
pub use breed::{BreedCatalogue, BreedSource};
pub use pet::{Pet, PetData, PetRepository};
pub use repositories::{DomainResult, RepositoryProvider};
pub use user::{User, UserData, UserRepository};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::{DomainError, FieldError};
