//! Pet DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Pet, PetData};

/// Reference to the owning user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OwnerDto {
    pub id: i32,
}

/// Pet API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PetDto {
    pub id: i32,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub owner: OwnerDto,
}

impl From<Pet> for PetDto {
    fn from(p: Pet) -> Self {
        Self {
            id: p.id,
            name: p.name,
            breed: p.breed,
            age: p.age,
            owner: OwnerDto { id: p.owner_id },
        }
    }
}

/// Create / update pet request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PetRequest {
    #[validate(length(min = 1, max = 100, code = "name-length", message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, code = "breed-length", message = "Breed must be 1-100 characters"))]
    pub breed: String,
    #[validate(range(min = 0, code = "age-range", message = "Age must not be negative"))]
    pub age: i32,
    pub owner: OwnerDto,
}

impl From<PetRequest> for PetData {
    fn from(r: PetRequest) -> Self {
        Self {
            name: r.name,
            breed: r.breed,
            age: r.age,
            owner_id: r.owner.id,
        }
    }
}
