//! Request payload rules that need the database
//!
//! These run after the JSON body has been decoded and passed its syntactic
//! checks, and before any service mutation. Every failed rule contributes
//! one [`FieldError`]; a non-empty set is returned as
//! [`DomainError::FieldValidation`].

use std::sync::Arc;

use crate::application::services::UserService;
use crate::domain::{DomainError, DomainResult, FieldError};

#[derive(Clone)]
pub struct PayloadRules {
    users: Arc<UserService>,
}

impl PayloadRules {
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }

    /// Email must not be used by any user.
    pub async fn check_new_user(&self, email: &str) -> DomainResult<()> {
        let mut errors = Vec::new();
        self.email_available(email, None, &mut errors).await?;
        into_result(errors)
    }

    /// Email must not be used by any user other than `id`.
    pub async fn check_user_update(&self, id: i32, email: &str) -> DomainResult<()> {
        let mut errors = Vec::new();
        self.email_available(email, Some(id), &mut errors).await?;
        into_result(errors)
    }

    /// The referenced owner must exist.
    pub async fn check_pet(&self, owner_id: i32) -> DomainResult<()> {
        let mut errors = Vec::new();
        self.owner_exists(owner_id, &mut errors).await?;
        into_result(errors)
    }

    async fn email_available(
        &self,
        email: &str,
        exclude_id: Option<i32>,
        errors: &mut Vec<FieldError>,
    ) -> DomainResult<()> {
        if self.users.user_exists(email, exclude_id).await? {
            errors.push(FieldError::email_exists());
        }
        Ok(())
    }

    async fn owner_exists(&self, owner_id: i32, errors: &mut Vec<FieldError>) -> DomainResult<()> {
        match self.users.retrieve(owner_id).await {
            Ok(_) => Ok(()),
            Err(DomainError::UserNotFound) => {
                errors.push(FieldError::owner_not_found());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

fn into_result(errors: Vec<FieldError>) -> DomainResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::FieldValidation(errors))
    }
}
