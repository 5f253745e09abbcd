//! # Order Actor (Order State Machine)
//!
//! Owns every order record and enforces the transition table centrally:
//!
//! | Action | Requires | Effect |
//! |---|---|---|
//! | drop-off (create) | user and club exist, cell free | claim cell, allocate number, code, bag; `Pending` |
//! | `CourierPickup` | `Pending`, cell set | release cell; `InProgress` |
//! | `ReceiveAtLaundry` | `InProgress`, no Received proof | record Received |
//! | `MarkWashed` | `InProgress`, Received, no Processed | record Processed |
//! | `Pack` | `InProgress`, Processed, no Ready | record Ready |
//! | `CourierDeliver` | `InProgress`, Ready, target cell free | claim cell; `ReadyForPickup` |
//! | `CompletePickup` | requester owns the order, `ReadyForPickup` | release cell; `Completed` |
//! | `Cancel` | not terminal | release cell; `Canceled` |
//! | `ReportIssue` | - | append issue |
//!
//! ## Dependencies
//!
//! The actor reaches the user and club directories, the identifier allocator and the
//! locker ledger through clients injected with [`OrderContext`] at `run()` time. The
//! dependency graph is acyclic (none of those actors talk back to orders), so shutdown
//! by dropping clients works.
//!
//! ## Atomicity
//!
//! Actions run on a working copy that is stored only on success, and every external
//! side effect happens after the local preconditions passed. Drop-off undoes its own
//! claims when a later allocation step fails.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{ClubClient, LockerClient, OrderClient, SequenceClient, UserClient};
use crate::clock::SharedClock;
use crate::framework::ResourceActor;
use crate::model::Order;
use crate::notification::NotificationDispatcher;
use chrono::FixedOffset;

/// Runtime dependencies of the Order actor.
#[derive(Debug, Clone)]
pub struct OrderContext {
    pub users: UserClient,
    pub clubs: ClubClient,
    pub sequences: SequenceClient,
    pub lockers: LockerClient,
    pub clock: SharedClock,
    /// Offset used to pick the calendar day of an order number.
    pub local_offset: FixedOffset,
}

/// Creates a new Order actor and its client.
pub fn new(
    mailbox_capacity: usize,
    notifier: NotificationDispatcher,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, OrderClient::new(generic_client, notifier))
}
