//! Error types for the Club actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClubError {
    #[error("Club not found: {0}")]
    NotFound(String),

    /// Another club already uses the code.
    #[error("Club code already in use: {0}")]
    AlreadyExists(String),

    #[error("Club validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ClubError {
    fn from(msg: String) -> Self {
        ClubError::ActorCommunicationError(msg)
    }
}
