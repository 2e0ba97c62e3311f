//! Pet aggregate

pub mod model;
pub mod repository;

pub use model::{Pet, PetData};
pub use repository::PetRepository;
