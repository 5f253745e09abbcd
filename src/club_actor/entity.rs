//! [`ActorEntity`] implementation for [`Club`].

use super::error::ClubError;
use crate::framework::ActorEntity;
use crate::model::{Club, ClubCreate, ClubId, ClubUpdate};
use async_trait::async_trait;
use std::convert::Infallible;

fn validate_name(raw: &str) -> Result<String, ClubError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ClubError::ValidationError("name must not be empty".into()));
    }
    Ok(name.to_string())
}

#[async_trait]
impl ActorEntity for Club {
    type Id = ClubId;
    type Create = ClubCreate;
    type Update = ClubUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = ClubError;

    fn assign_id(seq: u32, _params: &ClubCreate) -> ClubId {
        ClubId(seq)
    }

    async fn from_create_params(
        id: ClubId,
        params: ClubCreate,
        _ctx: &(),
    ) -> Result<Self, ClubError> {
        Ok(Self {
            id,
            name: validate_name(&params.name)?,
            code: params.code,
        })
    }

    fn conflicts_with(&self, params: &ClubCreate) -> Option<ClubError> {
        (self.code == params.code).then(|| ClubError::AlreadyExists(params.code.to_string()))
    }

    async fn on_update(&mut self, update: ClubUpdate, _ctx: &()) -> Result<(), ClubError> {
        self.name = validate_name(&update.name)?;
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), ClubError> {
        match action {}
    }
}
