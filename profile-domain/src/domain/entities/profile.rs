use serde::{Deserialize, Serialize};

use super::common::EntityId;
use crate::domain::errors::{DomainError, DomainResult};

/// Locally owned profile record linking an application user to their
/// identity-provider account via `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Store-assigned identifier, absent until the profile is persisted.
    pub id: Option<EntityId>,
    /// Identifier of the account the identity provider created.
    pub user_id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Profile {
    /// Build the profile persisted for a registration, attaching the id the
    /// identity provider assigned to the new account.
    pub fn from_registration(request: &RegistrationRequest, user_id: String) -> Self {
        Self {
            id: None,
            user_id,
            username: request.username.clone(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
        }
    }
}

/// Validated registration input. Input only, never persisted as-is.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationRequest {
    pub fn new(
        username: String,
        first_name: String,
        last_name: String,
        email: String,
        password: String,
    ) -> DomainResult<Self> {
        Self::validate_username(&username)?;
        Self::validate_email(&email)?;

        if password.is_empty() {
            return Err(DomainError::Validation {
                field: "password".to_string(),
                message: "Password cannot be empty".to_string(),
            });
        }

        Ok(Self {
            username,
            first_name,
            last_name,
            email,
            password,
        })
    }

    /// Validate username according to business rules
    pub fn validate_username(username: &str) -> DomainResult<()> {
        if username.is_empty() {
            return Err(DomainError::UsernameIsMissing);
        }

        if username.len() > 100 {
            return Err(DomainError::Validation {
                field: "username".to_string(),
                message: "Username cannot exceed 100 characters".to_string(),
            });
        }

        if !username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')
        {
            return Err(DomainError::Validation {
                field: "username".to_string(),
                message:
                    "Username can only contain alphanumeric characters, hyphens, underscores, and dots"
                        .to_string(),
            });
        }

        Ok(())
    }

    /// Validate email address
    pub fn validate_email(email: &str) -> DomainResult<()> {
        if email.is_empty() || !email.contains('@') || !email.contains('.') {
            return Err(DomainError::Validation {
                field: "email".to_string(),
                message: format!("Invalid email address: {}", email),
            });
        }

        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(DomainError::Validation {
                field: "email".to_string(),
                message: format!("Invalid email address: {}", email),
            });
        }

        Ok(())
    }
}
