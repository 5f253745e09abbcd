//! Error types for the Verification actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum VerificationError {
    /// No code is pending for the phone.
    #[error("No verification code pending for {0}")]
    NotFound(String),

    /// The attempt limit was reached; a new code must be requested.
    #[error("Too many verification attempts for {0}")]
    TooManyAttempts(String),

    /// The pending code expired; a new code must be requested.
    #[error("Verification code expired for {0}")]
    Expired(String),

    /// The code could not be delivered to the phone.
    #[error("Verification code delivery failed: {0}")]
    Delivery(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for VerificationError {
    fn from(msg: String) -> Self {
        VerificationError::ActorCommunicationError(msg)
    }
}
