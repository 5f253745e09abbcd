//! # Laundry Locker
//!
//! > **Order fulfillment for a laundry service collecting through club lockers.**
//!
//! A customer drops a bag into a locker cell at a fitness club, a courier takes it to the
//! laundry, staff record photo proofs while it is washed and packed, the courier brings
//! it back to a cell, and the customer opens that cell with a 4-digit pickup code.
//! Customers register by proving control of their phone number with a one-time code.
//!
//! ## Design
//!
//! Every store is a **resource actor**: one Tokio task that owns the entities of one type
//! and processes its mailbox sequentially. The invariants that matter for concurrent
//! use fall out of that:
//!
//! - the per-(club, day) order counter is a read-modify-write inside one actor, so
//!   concurrent drop-offs receive distinct, gap-free order numbers;
//! - a locker cell is claimed by a conditional update inside the ledger actor, so a
//!   cell never holds two orders;
//! - checks of a verification code are serialized per phone, so a code is consumed once.
//!
//! Status transitions are validated in one place, the Order actor, against a closed
//! status enum. Customer notifications are dispatched as detached tasks after a
//! transition commits and never affect its outcome.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) and the
//! [`ActorEntity`](framework::ActorEntity) trait, plus [`framework::mock`] for tests.
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! [`LaundrySystem`](lifecycle::LaundrySystem) starts and wires the actors and is the
//! facade of the service.
//!
//! ### 3. The Interface ([`clients`])
//! Typed clients such as [`OrderClient`](clients::OrderClient) that map framework errors
//! back to each actor's own error enum.
//!
//! ### 4. The Actors
//! - [`order_actor`]: order state machine and drop-off orchestration
//! - [`sequence_actor`]: daily order numbers and bag numbers
//! - [`locker_actor`]: cell occupancy ledger
//! - [`verification_actor`]: one-time phone verification codes
//! - [`user_actor`], [`club_actor`]: the directories orders refer to
//!
//! ### 5. Around the actors
//! [`model`] (plain data and formatted identifiers), [`notification`] (gateway seam and
//! dispatcher), [`config`] (environment), [`clock`] (injectable time).
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod clients;
pub mod clock;
pub mod club_actor;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod locker_actor;
pub mod model;
pub mod notification;
pub mod order_actor;
pub mod sequence_actor;
pub mod user_actor;
pub mod verification_actor;
