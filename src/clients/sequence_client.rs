//! # Sequence Client
//!
//! High-level API of the Identifier Allocator.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{ClubId, SequenceCounter, SequenceKey};
use crate::sequence_actor::{SequenceAction, SequenceActionResult, SequenceError};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, instrument};

/// Client for interacting with the Sequence actor.
#[derive(Clone, Debug)]
pub struct SequenceClient {
    inner: ResourceClient<SequenceCounter>,
}

impl SequenceClient {
    pub fn new(inner: ResourceClient<SequenceCounter>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<SequenceCounter> for SequenceClient {
    type Error = SequenceError;

    fn inner(&self) -> &ResourceClient<SequenceCounter> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<SequenceError>()
            .unwrap_or_else(|other| SequenceError::ActorCommunicationError(other.to_string()))
    }
}

impl SequenceClient {
    async fn next(&self, key: SequenceKey) -> Result<u32, SequenceError> {
        match self
            .inner
            .perform_action(key, SequenceAction::Next)
            .await
            .map_err(Self::map_error)?
        {
            SequenceActionResult::Next(value) => {
                debug!(%key, value, "Allocated");
                Ok(value)
            }
            _ => unreachable!("Next action must return Next result"),
        }
    }

    /// Next order sequence for the club on the given local day, starting at 1.
    #[instrument(skip(self))]
    pub async fn next_daily(&self, club: ClubId, day: NaiveDate) -> Result<u32, SequenceError> {
        self.next(SequenceKey::Daily { club, day }).await
    }

    /// Next bag label number for the club, starting at 1.
    #[instrument(skip(self))]
    pub async fn next_bag(&self, club: ClubId) -> Result<u32, SequenceError> {
        self.next(SequenceKey::Bag { club }).await
    }

    /// Hands `value` back if it is still the latest one allocated for `key`.
    #[instrument(skip(self))]
    pub async fn rollback(&self, key: SequenceKey, value: u32) -> Result<bool, SequenceError> {
        match self
            .inner
            .perform_action(key, SequenceAction::Rollback(value))
            .await
            .map_err(Self::map_error)?
        {
            SequenceActionResult::Rollback(undone) => Ok(undone),
            _ => unreachable!("Rollback action must return Rollback result"),
        }
    }

    /// Sets the last allocated value for `key`. Fails with `SeedBelowCurrent` if values
    /// above `last` were already handed out.
    #[instrument(skip(self))]
    pub async fn seed(&self, key: SequenceKey, last: u32) -> Result<(), SequenceError> {
        match self
            .inner
            .perform_action(key, SequenceAction::Seed(last))
            .await
            .map_err(Self::map_error)?
        {
            SequenceActionResult::Seed(()) => Ok(()),
            _ => unreachable!("Seed action must return Seed result"),
        }
    }

    /// Last value allocated for `key` (0 when none).
    pub async fn current(&self, key: SequenceKey) -> Result<u32, SequenceError> {
        Ok(self.get(key).await?.map_or(0, |c| c.last))
    }
}
