//! Pure data structures (DTOs) managed by the actors, plus the formatted identifiers
//! and the sub-phase projection.

pub mod club;
pub mod error;
pub mod identifiers;
pub mod ids;
pub mod locker;
pub mod order;
pub mod phone;
pub mod proof;
pub mod sequence;
pub mod user;
pub mod verification;

pub use club::*;
pub use error::*;
pub use identifiers::*;
pub use ids::*;
pub use locker::*;
pub use order::*;
pub use phone::*;
pub use proof::*;
pub use sequence::*;
pub use user::*;
pub use verification::*;
