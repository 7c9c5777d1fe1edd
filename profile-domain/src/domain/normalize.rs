use std::collections::HashMap;

use serde::Deserialize;
use tracing::{error, warn};

use crate::domain::errors::{DomainError, IdentityError};

/// Error payload returned by Keycloak on failed admin requests. Parsed only
/// to extract the human-readable message.
#[derive(Debug, Clone, Deserialize)]
pub struct KeycloakErrorBody {
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
}

/// Translates raw identity-provider failures into stable domain errors.
///
/// Keycloak reports business-level failures (duplicate username, duplicate
/// email, ...) only through free-form `errorMessage` strings; the table here
/// pins the known strings to stable codes. Everything else, including
/// unparseable bodies and transport failures, collapses to
/// [`DomainError::Uncategorized`].
pub struct ErrorNormalizer {
    codes: HashMap<&'static str, DomainError>,
}

impl ErrorNormalizer {
    pub fn new() -> Self {
        let mut codes = HashMap::new();
        codes.insert("User exists with same username", DomainError::UserExisted);
        codes.insert("User exists with same email", DomainError::EmailExisted);
        codes.insert("User name is missing", DomainError::UsernameIsMissing);
        Self { codes }
    }

    /// Map a provider error to a domain error. Always returns an error,
    /// never re-raises the original.
    pub fn normalize(&self, err: &IdentityError) -> DomainError {
        warn!("Cannot complete identity provider request: {}", err);

        if let IdentityError::Http { body, .. } = err {
            match serde_json::from_str::<KeycloakErrorBody>(body) {
                Ok(response) => {
                    if let Some(code) = response
                        .error_message
                        .as_deref()
                        .and_then(|message| self.codes.get(message))
                    {
                        return code.clone();
                    }
                }
                Err(parse_err) => {
                    error!("Cannot deserialize identity provider error body: {}", parse_err);
                }
            }
        }

        DomainError::Uncategorized
    }
}

impl Default for ErrorNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
