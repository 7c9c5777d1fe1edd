use thiserror::Error;

/// Terminal application errors observed by callers of the service layer.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("User already exists with this username")]
    UserExisted,

    #[error("User already exists with this email")]
    EmailExisted,

    #[error("Username is missing")]
    UsernameIsMissing,

    #[error("Identity provider response is missing the Location header")]
    MissingUserLocation,

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Profile store error: {message}")]
    Store { message: String },

    #[error("Uncategorized error")]
    Uncategorized,
}

impl DomainError {
    /// Stable error code exposed to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::UserExisted => "USER_EXISTED",
            DomainError::EmailExisted => "EMAIL_EXISTED",
            DomainError::UsernameIsMissing => "USERNAME_IS_MISSING",
            DomainError::MissingUserLocation => "MISSING_USER_LOCATION",
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::Store { .. } => "STORE_ERROR",
            DomainError::Uncategorized => "UNCATEGORIZED_EXCEPTION",
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors raised by the identity-provider client.
///
/// These are deliberately not convertible into [`DomainError`] with `?`;
/// every identity-provider failure must pass through the error normalizer.
#[derive(Error, Debug, Clone)]
pub enum IdentityError {
    #[error("Identity provider returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Request to identity provider failed: {reason}")]
    Transport { reason: String },

    #[error("Failed to decode identity provider response: {reason}")]
    Decode { reason: String },
}

/// Profile-store errors. These bypass the normalizer and surface unchanged.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },

    #[error("Serialization failed: {message}")]
    SerializationFailed { message: String },
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        DomainError::Store {
            message: err.to_string(),
        }
    }
}
