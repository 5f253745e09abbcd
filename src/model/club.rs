use crate::model::{ClubCode, ClubId};
use serde::{Deserialize, Serialize};

/// A fitness club hosting a locker bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub code: ClubCode,
}

/// Payload for creating a new club.
#[derive(Debug, Clone)]
pub struct ClubCreate {
    pub name: String,
    pub code: ClubCode,
}

/// Payload for renaming a club. The code is fixed once orders reference it.
#[derive(Debug, Clone)]
pub struct ClubUpdate {
    pub name: String,
}
