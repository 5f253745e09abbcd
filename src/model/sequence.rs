use crate::model::ClubId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Scope of a monotonically increasing counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceKey {
    /// Order numbers restart every local calendar day, per club.
    Daily { club: ClubId, day: NaiveDate },
    /// Bag labels keep counting per club.
    Bag { club: ClubId },
}

impl Display for SequenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceKey::Daily { club, day } => write!(f, "daily/{club}/{day}"),
            SequenceKey::Bag { club } => write!(f, "bag/{club}"),
        }
    }
}

/// Last value handed out for a key. A counter at zero is indistinguishable from one
/// that was never used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceCounter {
    pub key: SequenceKey,
    pub last: u32,
}
