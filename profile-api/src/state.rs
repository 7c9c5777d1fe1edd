use std::sync::Arc;

use profile_domain::{
    application::services::ProfileService,
    domain::normalize::ErrorNormalizer,
    infrastructure::adapters::{KeycloakIdentityProvider, MongoProfileRepository},
};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub profile_service: Arc<ProfileService>,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let repository = Arc::new(
            MongoProfileRepository::connect(&config.mongodb_uri, &config.mongodb_database).await?,
        );
        let identity = Arc::new(KeycloakIdentityProvider::new(
            config.keycloak_url.clone(),
            config.keycloak_realm.clone(),
        ));

        let profile_service = Arc::new(ProfileService::new(
            repository,
            identity,
            ErrorNormalizer::new(),
            config.idp_client_id.clone(),
            config.idp_client_secret.clone(),
        ));

        Ok(Self {
            config: config.clone(),
            profile_service,
        })
    }
}
