//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod pet_repository;
pub mod repository_provider;
pub mod user_repository;

pub use pet_repository::SeaOrmPetRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use user_repository::SeaOrmUserRepository;
