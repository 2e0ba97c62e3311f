use thiserror::Error;

/// A validation failure attributed to one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Path of the offending field, e.g. `["owner"]`.
    pub loc: Vec<String>,
    /// Machine-readable error code, e.g. `email-exists`.
    pub kind: String,
    pub msg: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            loc: vec![field.into()],
            kind: kind.into(),
            msg: msg.into(),
        }
    }

    pub fn email_exists() -> Self {
        Self::new("email", "email-exists", "Email already exists")
    }

    pub fn owner_not_found() -> Self {
        Self::new("owner", "owner-not-found", "Owner not found")
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User not found")]
    UserNotFound,

    #[error("Pet not found")]
    PetNotFound,

    #[error("Validation failed: {} field error(s)", .0.len())]
    FieldValidation(Vec<FieldError>),

    #[error("{0}")]
    BreedsUnavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Machine-readable code used in HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::UserNotFound => "user-not-found",
            DomainError::PetNotFound => "pet-not-found",
            DomainError::FieldValidation(_) => "validation-error",
            DomainError::BreedsUnavailable(_) => "breeds-unavailable",
            DomainError::Database(_) => "internal-error",
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
