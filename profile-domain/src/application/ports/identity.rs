use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::RegistrationRequest;
use crate::domain::errors::IdentityError;

/// Form parameters for the OAuth2 token exchange.
#[derive(Debug, Clone, Serialize)]
pub struct TokenExchangeParams {
    pub grant_type: String,
    pub client_id: String,
    pub client_secret: String,
    pub scope: String,
}

impl TokenExchangeParams {
    /// Client-credentials grant with the fixed `openid` scope used for
    /// provider-to-provider calls.
    pub fn client_credentials(client_id: String, client_secret: String) -> Self {
        Self {
            grant_type: "client_credentials".to_string(),
            client_id,
            client_secret,
            scope: "openid".to_string(),
        }
    }
}

/// Access token returned by the token endpoint.
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub scope: Option<String>,
}

impl AuthToken {
    pub fn new(
        access_token: String,
        expires_in: i64,
        token_type: Option<String>,
        scope: Option<String>,
    ) -> Self {
        Self {
            access_token,
            token_type: token_type.unwrap_or_else(|| "Bearer".to_string()),
            expires_at: Utc::now() + chrono::Duration::seconds(expires_in),
            scope,
        }
    }

    /// Render the `Authorization` header value for requests made with this
    /// token.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// User-creation payload sent to the identity provider's admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreationParams {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enabled: bool,
    pub email_verified: bool,
    pub credentials: Vec<CredentialParam>,
}

impl UserCreationParams {
    /// Payload for a registration: account enabled, email unverified, one
    /// permanent password credential.
    pub fn from_registration(request: &RegistrationRequest) -> Self {
        Self {
            username: request.username.clone(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            enabled: true,
            email_verified: false,
            credentials: vec![CredentialParam::password(request.password.clone())],
        }
    }
}

/// A single credential attached to a new identity-provider account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialParam {
    #[serde(rename = "type")]
    pub type_: String,
    pub value: String,
    pub temporary: bool,
}

impl CredentialParam {
    pub fn password(value: String) -> Self {
        Self {
            type_: "password".to_string(),
            value,
            temporary: false,
        }
    }
}

/// Successful response from the user-creation endpoint.
#[derive(Debug, Clone)]
pub struct UserCreationResponse {
    /// `Location` header pointing at the created user resource, when the
    /// provider supplied one.
    pub location: Option<String>,
}

/// Identity-provider port: token exchange and remote account creation.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange client credentials for an access token.
    async fn exchange_token(
        &self,
        params: &TokenExchangeParams,
    ) -> Result<AuthToken, IdentityError>;

    /// Create a user, authenticating with `token`. Success carries the
    /// `Location` header of the new resource.
    async fn create_user(
        &self,
        token: &AuthToken,
        params: &UserCreationParams,
    ) -> Result<UserCreationResponse, IdentityError>;
}
