//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client maps [`FrameworkError`](crate::framework::FrameworkError) back into its
//! actor's own error enum, recovering the entity error when the actor produced one.

pub mod club_client;
pub mod locker_client;
pub mod order_client;
pub mod sequence_client;
pub mod user_client;
pub mod verification_client;

pub use club_client::*;
pub use locker_client::*;
pub use order_client::*;
pub use sequence_client::*;
pub use user_client::*;
pub use verification_client::*;
