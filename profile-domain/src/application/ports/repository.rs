use async_trait::async_trait;

use crate::domain::entities::Profile;
use crate::domain::errors::RepositoryError;

/// Profile store port: the document store's two operations.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch every stored profile, in whatever order the store provides.
    async fn find_all(&self) -> Result<Vec<Profile>, RepositoryError>;

    /// Persist a new profile, returning it with the store-assigned id.
    async fn save(&self, profile: Profile) -> Result<Profile, RepositoryError>;
}
