//! Club-specific resource logic: the locations hosting locker banks.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ClubClient;
use crate::framework::ResourceActor;
use crate::model::Club;

/// Creates a new Club actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Club>, ClubClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, ClubClient::new(generic_client))
}
