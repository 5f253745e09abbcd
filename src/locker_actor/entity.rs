//! [`ActorEntity`] implementation for [`LockerCell`].

use super::actions::{LockerAction, LockerActionResult};
use super::error::LockerError;
use crate::framework::ActorEntity;
use crate::model::{CellKey, LockerCell};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for LockerCell {
    type Id = CellKey;
    type Create = Infallible;
    type Update = Infallible;
    type Action = LockerAction;
    type ActionResult = LockerActionResult;
    type Context = ();
    type Error = LockerError;

    fn assign_id(_seq: u32, params: &Infallible) -> CellKey {
        match *params {}
    }

    /// Cells only come into being through `Claim`.
    async fn from_create_params(
        _key: CellKey,
        params: Infallible,
        _ctx: &(),
    ) -> Result<Self, LockerError> {
        match params {}
    }

    fn vacant(key: &CellKey) -> Option<Self> {
        Some(LockerCell::free(key.clone()))
    }

    fn is_retired(&self) -> bool {
        self.occupant.is_none()
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), LockerError> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: LockerAction,
        _ctx: &(),
    ) -> Result<LockerActionResult, LockerError> {
        match action {
            LockerAction::Claim(order) => match self.occupant {
                Some(holder) if holder != order => Err(LockerError::CellOccupied {
                    cell: self.key.clone(),
                    holder,
                }),
                _ => {
                    self.occupant = Some(order);
                    Ok(LockerActionResult::Claim(()))
                }
            },
            LockerAction::Release(order) => {
                let released = self.occupant == Some(order);
                if released {
                    self.occupant = None;
                }
                Ok(LockerActionResult::Release(released))
            }
        }
    }
}
