//! Error types for the Locker actor.

use crate::model::{CellKey, OrderId};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LockerError {
    /// Another active order holds the cell.
    #[error("Cell {cell} is occupied by {holder}")]
    CellOccupied { cell: CellKey, holder: OrderId },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for LockerError {
    fn from(msg: String) -> Self {
        LockerError::ActorCommunicationError(msg)
    }
}
