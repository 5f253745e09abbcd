//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Order, LockerCell,
//! SequenceCounter, VerificationCode, …) must implement to be managed by the generic
//! `ResourceActor`. It specifies associated types for IDs, DTOs, actions, context, and errors,
//! and provides lifecycle hooks (`from_create_params`, `on_update`, `handle_action`).
//!
//! # Two kinds of resources
//! - **Generated identity** (orders, users, clubs): the actor hands out a sequence number
//!   and [`ActorEntity::assign_id`] turns it into a typed id.
//! - **Natural keys** (locker cells, counters, verification codes): the key is part of the
//!   payload, so `assign_id` ignores the sequence. Such resources usually also override
//!   [`ActorEntity::vacant`] so actions can target a key that was never created, and
//!   [`ActorEntity::is_retired`] so the actor drops entries that no longer carry state.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::vacant`]
//! - [`ActorEntity::is_retired`]
//! - [`ActorEntity::conflicts_with`]
//!
//! You do **not** need to implement these unless you want to customize behavior.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
///
/// # Atomicity
/// `on_update` and `handle_action` run against a working copy of the entity. The actor
/// stores the copy only when the hook returns `Ok`, so a hook that fails halfway leaves
/// the stored entity untouched.
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Claim`, `CourierPickup`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message: clients match on a single type,
    /// at the cost of every action nominally being able to return every variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Chooses the id for a new entity. `seq` is the actor's creation counter
    /// (1, 2, 3, …); keyed resources take their id from `params` instead.
    fn assign_id(seq: u32, params: &Self::Create) -> Self::Id;

    /// Construct the full Entity from the ID and Payload.
    ///
    /// Creation may consult other actors through `ctx` (validation, allocation). If it
    /// fails after performing side effects, it is responsible for undoing them; the
    /// actor stores nothing.
    async fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Materializes an entity for an id that is not in the store, so an action can run
    /// against it. `None` (the default) makes such actions fail with `NotFound`.
    fn vacant(_id: &Self::Id) -> Option<Self> {
        None
    }

    /// Rejects a create whose params clash with an entity already in the store (a phone
    /// or club code in use). The actor checks every stored entity before creating, in the
    /// same step as the insert.
    fn conflicts_with(&self, _params: &Self::Create) -> Option<Self::Error> {
        None
    }

    /// Whether the entity should be dropped from the store after a successful
    /// action or update (a consumed code, a freed cell).
    fn is_retired(&self) -> bool {
        false
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
