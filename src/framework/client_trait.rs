//! # ActorClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default `get` and
//! `find` methods built on top of a generic `ResourceClient`.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// Implementors supply the inner `ResourceClient` and a mapping from `FrameworkError`
/// into their own error enum; `get` and `find` come for free.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Club> for ClubClient {
///     type Error = ClubError;
///
///     fn inner(&self) -> &ResourceClient<Club> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         ClubError::ActorCommunicationError(e.to_string())
///     }
/// }
///
/// let club = clubs.get(ClubId(1)).await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity matching `predicate`.
    #[tracing::instrument(skip_all)]
    async fn find<F>(&self, predicate: F) -> Result<Vec<T>, Self::Error>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        tracing::debug!("Sending request");
        self.inner().find(predicate).await.map_err(Self::map_error)
    }
}
