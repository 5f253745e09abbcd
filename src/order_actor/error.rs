//! Error types for the Order actor.

use crate::club_actor::ClubError;
use crate::locker_actor::LockerError;
use crate::model::{OrderStatus, ProofKind};
use crate::sequence_actor::SequenceError;
use crate::user_actor::UserError;
use thiserror::Error;

/// The transition-table condition that did not hold.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Precondition {
    #[error("expected status {expected}, found {actual}")]
    Status {
        expected: OrderStatus,
        actual: OrderStatus,
    },

    #[error("order is already {0}")]
    Terminal(OrderStatus),

    #[error("no locker cell assigned")]
    CellNotAssigned,

    #[error("no {0} proof recorded")]
    ProofMissing(ProofKind),

    #[error("{0} proof already recorded")]
    ProofRecorded(ProofKind),
}

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order (or a user/club it references) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The transition is not allowed from the order's current state. Nothing changed.
    #[error("Precondition failed: {0}")]
    PreconditionFailed(Precondition),

    /// The requester does not own the order.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A cell or sequence was taken concurrently; the whole operation may be retried.
    #[error("Allocation conflict: {0}")]
    AllocationConflict(String),

    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl From<Precondition> for OrderError {
    fn from(p: Precondition) -> Self {
        OrderError::PreconditionFailed(p)
    }
}

impl From<LockerError> for OrderError {
    fn from(e: LockerError) -> Self {
        match e {
            LockerError::CellOccupied { .. } => OrderError::AllocationConflict(e.to_string()),
            LockerError::ActorCommunicationError(msg) => OrderError::ActorCommunicationError(msg),
        }
    }
}

impl From<SequenceError> for OrderError {
    fn from(e: SequenceError) -> Self {
        match e {
            SequenceError::Exhausted(_) => OrderError::AllocationConflict(e.to_string()),
            SequenceError::ActorCommunicationError(msg) => OrderError::ActorCommunicationError(msg),
        }
    }
}

impl From<UserError> for OrderError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<ClubError> for OrderError {
    fn from(e: ClubError) -> Self {
        match e {
            ClubError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
