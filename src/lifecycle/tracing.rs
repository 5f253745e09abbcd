//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate. The
//! format is compact and hides the module prefix (`with_target(false)`); actors identify
//! themselves with an `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown, and final store size
//! - **Entity Operations**: Create, Get, Update, Find, and every Action with its outcome
//! - **Client Calls**: `#[instrument]` spans with the ids involved
//! - **Notifications**: one `notify` span per detached delivery
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads (actions, create params)
//! RUST_LOG=debug cargo run
//!
//! # Only the framework's store traffic
//! RUST_LOG=laundry_locker::framework=debug cargo run
//! ```
//!
//! ## Drop-off Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO create_order: Created entity_type="Order" id=order_1 replaced=false size=1
//! INFO create_order: Drop-off accepted order_id=order_1 order_number=20260216-FC-001 cell=club_1/A1
//! INFO create_order: Order created order_id=order_1 order_number=20260216-FC-001
//! ```
//!
//! **With `RUST_LOG=debug`** the store requests behind it become visible:
//!
//! ```text
//! DEBUG Create entity_type="Order" params=OrderCreate { user_id: UserId(1), club_id: ClubId(1), cell: CellId("A1"), comment: None }
//! DEBUG Get entity_type="User" id=user_1 found=true
//! DEBUG Get entity_type="Club" id=club_1 found=true
//! DEBUG Action entity_type="LockerCell" id=club_1/A1 action=Claim(OrderId(1))
//! DEBUG Action entity_type="SequenceCounter" id=daily/club_1/2026-02-16 action=Next
//! DEBUG Action entity_type="SequenceCounter" id=bag/club_1 action=Next
//! ```
//!
//! The order is always the same: directory lookups, cell claim, then number allocation.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the actor
        .compact()
        .init();
}
