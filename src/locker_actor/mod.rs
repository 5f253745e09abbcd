//! # Locker Actor (Locker Cell Ledger)
//!
//! Tracks which order holds each physical cell. The ledger only stores occupied cells:
//! a cell nobody holds is simply absent, and claiming it materializes a free entry
//! first.
//!
//! Claims are conditional updates processed one at a time, so of two concurrent
//! drop-offs into the same cell exactly one wins and the other gets
//! [`LockerError::CellOccupied`].

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::LockerClient;
use crate::framework::ResourceActor;
use crate::model::LockerCell;

/// Creates a new Locker actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<LockerCell>, LockerClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, LockerClient::new(generic_client))
}
