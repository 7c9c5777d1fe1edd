use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use crate::application::ports::ProfileRepository;
use crate::domain::entities::{EntityId, Profile};
use crate::domain::errors::RepositoryError;

/// Stored shape of a profile in the `profiles` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProfileDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    user_id: String,
    username: String,
    first_name: String,
    last_name: String,
    email: String,
}

impl ProfileDocument {
    fn from_profile(profile: &Profile) -> Self {
        Self {
            // the store assigns _id on insert
            id: None,
            user_id: profile.user_id.clone(),
            username: profile.username.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
        }
    }

    fn into_profile(self) -> Profile {
        Profile {
            id: self.id.map(|oid| EntityId::from(oid.to_hex())),
            user_id: self.user_id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

/// MongoDB-backed profile repository.
pub struct MongoProfileRepository {
    collection: Collection<ProfileDocument>,
}

impl MongoProfileRepository {
    /// Connect to the store and bind the `profiles` collection.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, RepositoryError> {
        let client =
            Client::with_uri_str(uri)
                .await
                .map_err(|e| RepositoryError::ConnectionFailed {
                    message: e.to_string(),
                })?;

        Ok(Self {
            collection: client.database(database).collection("profiles"),
        })
    }
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    async fn find_all(&self) -> Result<Vec<Profile>, RepositoryError> {
        let cursor =
            self.collection
                .find(doc! {})
                .await
                .map_err(|e| RepositoryError::QueryFailed {
                    message: e.to_string(),
                })?;

        let documents: Vec<ProfileDocument> =
            cursor
                .try_collect()
                .await
                .map_err(|e| RepositoryError::QueryFailed {
                    message: e.to_string(),
                })?;

        Ok(documents
            .into_iter()
            .map(ProfileDocument::into_profile)
            .collect())
    }

    async fn save(&self, profile: Profile) -> Result<Profile, RepositoryError> {
        let document = ProfileDocument::from_profile(&profile);

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| RepositoryError::QueryFailed {
                message: e.to_string(),
            })?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(|oid| EntityId::from(oid.to_hex()));

        Ok(Profile { id, ..profile })
    }
}
