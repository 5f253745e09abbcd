use crate::model::{ClubId, Phone, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered customer (or staff member). Phone numbers are unique across users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub phone: Phone,
    pub username: String,
    /// Home club; drop-offs are allowed at any club.
    pub club_id: Option<ClubId>,
    pub registered_at: DateTime<Utc>,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub phone: Phone,
    pub username: String,
    pub club_id: Option<ClubId>,
    pub registered_at: DateTime<Utc>,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub club_id: Option<ClubId>,
}
