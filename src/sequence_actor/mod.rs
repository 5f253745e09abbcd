//! # Sequence Actor (Identifier Allocator)
//!
//! Hands out the per-(club, day) order sequence and the per-club bag sequence.
//!
//! Every counter lives in the actor's store and every increment is one message, so two
//! concurrent drop-offs for the same club and day can never observe the same value:
//! the second `Next` is only processed after the first has been committed.
//!
//! Keys are natural: a `Next` on a key that was never seen starts from zero (see
//! [`ActorEntity::vacant`](crate::framework::ActorEntity::vacant)), and a counter rolled
//! back to zero leaves the store.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::SequenceClient;
use crate::framework::ResourceActor;
use crate::model::SequenceCounter;

/// Creates a new Sequence actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<SequenceCounter>, SequenceClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, SequenceClient::new(generic_client))
}
