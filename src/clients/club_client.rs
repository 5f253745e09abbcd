//! # Club Client
//!
//! Provides a high-level API for interacting with the `Club` actor.
use crate::club_actor::ClubError;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Club, ClubCreate, ClubId, ClubUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Club actor.
#[derive(Clone, Debug)]
pub struct ClubClient {
    inner: ResourceClient<Club>,
}

impl ClubClient {
    pub fn new(inner: ResourceClient<Club>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Club> for ClubClient {
    type Error = ClubError;

    fn inner(&self) -> &ResourceClient<Club> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<ClubError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ClubError::NotFound(id),
            Err(other) => ClubError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ClubClient {
    /// Creates a club. Codes are unique because they are embedded in order numbers.
    #[instrument(skip(self))]
    pub async fn create_club(&self, params: ClubCreate) -> Result<ClubId, ClubError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn rename_club(&self, id: ClubId, name: String) -> Result<Club, ClubError> {
        debug!("Sending request");
        self.inner
            .update(id, ClubUpdate { name })
            .await
            .map_err(Self::map_error)
    }
}
