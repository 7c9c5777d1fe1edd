use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{
    AuthToken, IdentityProvider, TokenExchangeParams, UserCreationParams, UserCreationResponse,
};
use crate::domain::errors::IdentityError;

/// Raw token response from Keycloak
#[derive(Debug, Clone, Deserialize)]
struct RawTokenResponse {
    access_token: String,
    expires_in: i64,
    scope: Option<String>,
    token_type: String,
}

/// Identity-provider adapter for Keycloak's OpenID Connect token endpoint
/// and admin users endpoint.
pub struct KeycloakIdentityProvider {
    base_url: String,
    realm: String,
    client: reqwest::Client,
}

impl KeycloakIdentityProvider {
    pub fn new(base_url: String, realm: String) -> Self {
        Self {
            base_url,
            realm,
            client: reqwest::Client::new(),
        }
    }

    pub fn new_with_client(base_url: String, realm: String, client: reqwest::Client) -> Self {
        Self {
            base_url,
            realm,
            client,
        }
    }

    fn token_url(&self) -> String {
        format!(
            "{}/realms/{}/protocol/openid-connect/token",
            self.base_url, self.realm
        )
    }

    fn users_url(&self) -> String {
        format!("{}/admin/realms/{}/users", self.base_url, self.realm)
    }
}

#[async_trait]
impl IdentityProvider for KeycloakIdentityProvider {
    async fn exchange_token(
        &self,
        params: &TokenExchangeParams,
    ) -> Result<AuthToken, IdentityError> {
        let form_data = [
            ("grant_type", params.grant_type.as_str()),
            ("client_id", params.client_id.as_str()),
            ("client_secret", params.client_secret.as_str()),
            ("scope", params.scope.as_str()),
        ];

        let response = self
            .client
            .post(self.token_url())
            .form(&form_data)
            .send()
            .await
            .map_err(|e| IdentityError::Transport {
                reason: format!("HTTP request failed: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityError::Http { status, body });
        }

        let raw_token: RawTokenResponse =
            response.json().await.map_err(|e| IdentityError::Decode {
                reason: format!("Failed to parse token response: {}", e),
            })?;

        Ok(AuthToken::new(
            raw_token.access_token,
            raw_token.expires_in,
            Some(raw_token.token_type),
            raw_token.scope,
        ))
    }

    async fn create_user(
        &self,
        token: &AuthToken,
        params: &UserCreationParams,
    ) -> Result<UserCreationResponse, IdentityError> {
        let response = self
            .client
            .post(self.users_url())
            .header(reqwest::header::AUTHORIZATION, token.authorization_header())
            .json(params)
            .send()
            .await
            .map_err(|e| IdentityError::Transport {
                reason: format!("HTTP request failed: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityError::Http { status, body });
        }

        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        Ok(UserCreationResponse { location })
    }
}
