//! Error types for the Sequence actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SequenceError {
    /// The counter cannot be incremented any further.
    #[error("Sequence exhausted: {0}")]
    Exhausted(String),

    /// A seed would hand out values that were already allocated.
    #[error("Seed {requested} for {key} is below the last allocated value {current}")]
    SeedBelowCurrent {
        key: String,
        current: u32,
        requested: u32,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SequenceError {
    fn from(msg: String) -> Self {
        SequenceError::ActorCommunicationError(msg)
    }
}
