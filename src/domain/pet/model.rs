//! Pet domain model

/// A stored pet. `owner_id` always refers to an existing user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub id: i32,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub owner_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetData {
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub owner_id: i32,
}
