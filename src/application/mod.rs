pub mod services;
pub mod validation;

// Re-export key types for convenience
pub use services::{BreedsService, PetService, UserService};
pub use validation::PayloadRules;
