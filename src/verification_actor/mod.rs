//! # Verification Actor (Verification Code Store)
//!
//! Ephemeral, single-use codes keyed by phone number. One pending code per phone:
//! issuing again overwrites the previous code and resets its attempt counter.
//!
//! A code leaves the store when it matches, when the attempt limit is reached, or when
//! it is found expired. Checks for a phone are serialized by the actor, so two racing
//! checks cannot both consume the same code.
//!
//! The store is owned by [`LaundrySystem`](crate::lifecycle::LaundrySystem) and lives
//! exactly as long as it does; nothing is shared across processes.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::VerificationClient;
use crate::clock::SharedClock;
use crate::config::VerificationPolicy;
use crate::framework::ResourceActor;
use crate::model::VerificationCode;

/// Runtime dependencies of the Verification actor.
#[derive(Debug, Clone)]
pub struct VerificationContext {
    pub policy: VerificationPolicy,
    pub clock: SharedClock,
}

/// Creates a new Verification actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<VerificationCode>, VerificationClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, VerificationClient::new(generic_client))
}
