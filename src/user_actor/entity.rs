//! [`ActorEntity`] implementation for [`User`].

use super::error::UserError;
use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;
use std::convert::Infallible;

const MAX_USERNAME_LEN: usize = 64;

fn validate_username(raw: &str) -> Result<String, UserError> {
    let name = raw.trim();
    if name.is_empty() || name.chars().count() > MAX_USERNAME_LEN {
        return Err(UserError::ValidationError(format!(
            "username must be 1..={MAX_USERNAME_LEN} characters"
        )));
    }
    Ok(name.to_string())
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    fn assign_id(seq: u32, _params: &UserCreate) -> UserId {
        UserId(seq)
    }

    async fn from_create_params(
        id: UserId,
        params: UserCreate,
        _ctx: &(),
    ) -> Result<Self, UserError> {
        Ok(Self {
            id,
            phone: params.phone,
            username: validate_username(&params.username)?,
            club_id: params.club_id,
            registered_at: params.registered_at,
        })
    }

    /// One account per phone.
    fn conflicts_with(&self, params: &UserCreate) -> Option<UserError> {
        (self.phone == params.phone).then(|| UserError::AlreadyExists(params.phone.to_string()))
    }

    /// # Fields Updated
    /// - `username`: display name
    /// - `club_id`: home club
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(username) = update.username {
            self.username = validate_username(&username)?;
        }
        if let Some(club_id) = update.club_id {
            self.club_id = Some(club_id);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), UserError> {
        match action {}
    }
}
