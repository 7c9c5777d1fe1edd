use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use profile_domain::{
    application::ports::{
        AuthToken, IdentityProvider, ProfileRepository, TokenExchangeParams, UserCreationParams,
        UserCreationResponse,
    },
    domain::{
        entities::{EntityId, Profile},
        errors::{IdentityError, RepositoryError},
    },
};

/// Mock identity provider with scriptable outcomes for testing
pub struct MockIdentityProvider {
    /// `Location` header returned on successful creation; `None` simulates
    /// a provider omitting it.
    pub location: Arc<Mutex<Option<String>>>,
    pub token_failure: Arc<Mutex<Option<IdentityError>>>,
    pub creation_failure: Arc<Mutex<Option<IdentityError>>>,
    pub token_requests: Arc<Mutex<Vec<TokenExchangeParams>>>,
    pub created_users: Arc<Mutex<Vec<UserCreationParams>>>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::with_location("http://localhost:8080/admin/realms/master/users/mock-user-1")
    }

    pub fn with_location(location: &str) -> Self {
        Self {
            location: Arc::new(Mutex::new(Some(location.to_string()))),
            token_failure: Arc::new(Mutex::new(None)),
            creation_failure: Arc::new(Mutex::new(None)),
            token_requests: Arc::new(Mutex::new(Vec::new())),
            created_users: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn without_location() -> Self {
        let provider = Self::new();
        *provider.location.lock().unwrap() = None;
        provider
    }

    pub fn fail_token_with(err: IdentityError) -> Self {
        let provider = Self::new();
        *provider.token_failure.lock().unwrap() = Some(err);
        provider
    }

    pub fn fail_creation_with(err: IdentityError) -> Self {
        let provider = Self::new();
        *provider.creation_failure.lock().unwrap() = Some(err);
        provider
    }

    pub fn created_users(&self) -> Vec<UserCreationParams> {
        self.created_users.lock().unwrap().clone()
    }

    pub fn token_requests(&self) -> Vec<TokenExchangeParams> {
        self.token_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn exchange_token(
        &self,
        params: &TokenExchangeParams,
    ) -> Result<AuthToken, IdentityError> {
        self.token_requests.lock().unwrap().push(params.clone());

        if let Some(err) = self.token_failure.lock().unwrap().clone() {
            return Err(err);
        }

        Ok(AuthToken::new(
            "mock-access-token".to_string(),
            300,
            None,
            Some(params.scope.clone()),
        ))
    }

    async fn create_user(
        &self,
        _token: &AuthToken,
        params: &UserCreationParams,
    ) -> Result<UserCreationResponse, IdentityError> {
        if let Some(err) = self.creation_failure.lock().unwrap().clone() {
            return Err(err);
        }

        self.created_users.lock().unwrap().push(params.clone());

        Ok(UserCreationResponse {
            location: self.location.lock().unwrap().clone(),
        })
    }
}

/// In-memory profile repository for testing
pub struct InMemoryProfileRepository {
    pub profiles: Arc<Mutex<Vec<Profile>>>,
    pub should_fail: Arc<Mutex<bool>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    pub fn stored(&self) -> Vec<Profile> {
        self.profiles.lock().unwrap().clone()
    }

    fn check_should_fail(&self) -> Result<(), RepositoryError> {
        if *self.should_fail.lock().unwrap() {
            Err(RepositoryError::QueryFailed {
                message: "Mock failure enabled".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_all(&self) -> Result<Vec<Profile>, RepositoryError> {
        self.check_should_fail()?;
        Ok(self.profiles.lock().unwrap().clone())
    }

    async fn save(&self, profile: Profile) -> Result<Profile, RepositoryError> {
        self.check_should_fail()?;

        let mut stored = profile;
        stored.id = Some(EntityId::new());
        self.profiles.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}
