//! Application services

mod breeds;
mod pet;
mod user;

pub use breeds::BreedsService;
pub use pet::PetService;
pub use user::UserService;
