use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::ports::{
    IdentityProvider, ProfileRepository, TokenExchangeParams, UserCreationParams,
    UserCreationResponse,
};
use crate::domain::entities::{Profile, RegistrationRequest};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::normalize::ErrorNormalizer;

/// Profile service implementing the registration and listing use cases.
pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
    identity: Arc<dyn IdentityProvider>,
    normalizer: ErrorNormalizer,
    client_id: String,
    client_secret: String,
}

impl ProfileService {
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        identity: Arc<dyn IdentityProvider>,
        normalizer: ErrorNormalizer,
        client_id: String,
        client_secret: String,
    ) -> Self {
        Self {
            repository,
            identity,
            normalizer,
            client_id,
            client_secret,
        }
    }

    /// List every stored profile.
    #[instrument(skip(self))]
    pub async fn get_all_profiles(&self) -> DomainResult<Vec<Profile>> {
        let profiles = self.repository.find_all().await?;

        info!("Found {} profiles", profiles.len());
        Ok(profiles)
    }

    /// Register a new user: create the account at the identity provider,
    /// then persist the linked profile.
    ///
    /// Known gap: if the remote account is created and the local save then
    /// fails, the remote account is left orphaned. There is no compensating
    /// delete.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegistrationRequest) -> DomainResult<Profile> {
        let params = TokenExchangeParams::client_credentials(
            self.client_id.clone(),
            self.client_secret.clone(),
        );
        let token = match self.identity.exchange_token(&params).await {
            Ok(token) => token,
            Err(err) => return Err(self.normalizer.normalize(&err)),
        };
        info!("Exchanged client credentials for {} token", token.token_type);

        let creation = UserCreationParams::from_registration(&request);
        let response = match self.identity.create_user(&token, &creation).await {
            Ok(response) => response,
            Err(err) => return Err(self.normalizer.normalize(&err)),
        };

        let user_id = extract_user_id(&response)?;
        info!("Identity provider created user '{}'", user_id);

        let profile = Profile::from_registration(&request, user_id);
        let profile = self.repository.save(profile).await?;

        Ok(profile)
    }
}

/// Extract the new user's id as the final path segment of the `Location`
/// header.
fn extract_user_id(response: &UserCreationResponse) -> DomainResult<String> {
    let location = response
        .location
        .as_deref()
        .ok_or(DomainError::MissingUserLocation)?;

    let user_id = match location.rfind('/') {
        Some(idx) => &location[idx + 1..],
        None => location,
    };

    Ok(user_id.to_string())
}
