//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and shutting down the actors of the laundry-locker service.
//!
//! ## Wiring
//!
//! The leaf actors (users, clubs, sequences, lockers, verification codes) have no
//! dependencies. The Order actor depends on all of them except the verification store,
//! and the notification dispatcher reads the user and club directories:
//!
//! ```text
//! orders ──► users, clubs, sequences, lockers
//!   │
//!   └──► dispatcher ──► users, clubs, gateway
//! verification (standalone)
//! ```
//!
//! Dependencies are injected when the actors start:
//!
//! ```rust,ignore
//! let (order_actor, orders) = order_actor::new(capacity, notifier.clone());
//! let order_handle = tokio::spawn(order_actor.run(OrderContext {
//!     users: users.clone(),
//!     clubs: clubs.clone(),
//!     sequences: sequences.clone(),
//!     lockers: lockers.clone(),
//!     clock: clock.clone(),
//!     local_offset: config.local_offset,
//! }));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for all actor tasks to finish
//!
//! Clients held in the Order actor's context are clones; they are released when that
//! actor exits, which then lets the leaf actors exit. The graph is acyclic, so channel
//! closure is enough.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber for the binary:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod laundry_system;
pub mod tracing;

pub use laundry_system::*;
pub use tracing::*;
