//! User DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{User, UserData};

/// User API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, code = "name-length", message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(
        email(code = "email-invalid", message = "Email address is not valid"),
        length(max = 100, code = "email-length", message = "Email must be at most 100 characters")
    )]
    pub email: String,
}

impl From<CreateUserRequest> for UserData {
    fn from(r: CreateUserRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
        }
    }
}

/// Update user request. A body `id` is accepted but the path id wins.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 100, code = "name-length", message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(
        email(code = "email-invalid", message = "Email address is not valid"),
        length(max = 100, code = "email-length", message = "Email must be at most 100 characters")
    )]
    pub email: String,
}

impl From<UpdateUserRequest> for UserData {
    fn from(r: UpdateUserRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
        }
    }
}
