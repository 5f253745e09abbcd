//! [`ActorEntity`] implementation for [`SequenceCounter`].

use super::actions::{SequenceAction, SequenceActionResult};
use super::error::SequenceError;
use crate::framework::ActorEntity;
use crate::model::{SequenceCounter, SequenceKey};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for SequenceCounter {
    type Id = SequenceKey;
    type Create = Infallible;
    type Update = Infallible;
    type Action = SequenceAction;
    type ActionResult = SequenceActionResult;
    type Context = ();
    type Error = SequenceError;

    fn assign_id(_seq: u32, params: &Infallible) -> SequenceKey {
        match *params {}
    }

    /// Counters start out `vacant`; `Seed` restores them.
    async fn from_create_params(
        _key: SequenceKey,
        params: Infallible,
        _ctx: &(),
    ) -> Result<Self, SequenceError> {
        match params {}
    }

    fn vacant(key: &SequenceKey) -> Option<Self> {
        Some(Self { key: *key, last: 0 })
    }

    fn is_retired(&self) -> bool {
        self.last == 0
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), SequenceError> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: SequenceAction,
        _ctx: &(),
    ) -> Result<SequenceActionResult, SequenceError> {
        match action {
            SequenceAction::Next => {
                self.last = self
                    .last
                    .checked_add(1)
                    .ok_or_else(|| SequenceError::Exhausted(self.key.to_string()))?;
                Ok(SequenceActionResult::Next(self.last))
            }
            SequenceAction::Rollback(value) => {
                let undone = value != 0 && self.last == value;
                if undone {
                    self.last -= 1;
                }
                Ok(SequenceActionResult::Rollback(undone))
            }
            SequenceAction::Seed(last) => {
                if last < self.last {
                    return Err(SequenceError::SeedBelowCurrent {
                        key: self.key.to_string(),
                        current: self.last,
                        requested: last,
                    });
                }
                self.last = last;
                Ok(SequenceActionResult::Seed(()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClubId;

    fn counter(last: u32) -> SequenceCounter {
        SequenceCounter {
            key: SequenceKey::Bag { club: ClubId(1) },
            last,
        }
    }

    #[tokio::test]
    async fn rollback_only_undoes_the_latest_value() {
        let mut c = counter(3);
        assert_eq!(
            c.handle_action(SequenceAction::Rollback(2), &()).await.unwrap(),
            SequenceActionResult::Rollback(false)
        );
        assert_eq!(c.last, 3);
        assert_eq!(
            c.handle_action(SequenceAction::Rollback(3), &()).await.unwrap(),
            SequenceActionResult::Rollback(true)
        );
        assert_eq!(c.last, 2);
    }

    #[tokio::test]
    async fn seed_never_moves_the_counter_back() {
        let mut c = counter(5);
        let err = c
            .handle_action(SequenceAction::Seed(2), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            SequenceError::SeedBelowCurrent {
                key: "bag/club_1".to_string(),
                current: 5,
                requested: 2,
            }
        );
        assert_eq!(c.last, 5);

        c.handle_action(SequenceAction::Seed(9), &()).await.unwrap();
        assert_eq!(
            c.handle_action(SequenceAction::Next, &()).await.unwrap(),
            SequenceActionResult::Next(10)
        );
    }

    #[tokio::test]
    async fn exhausted_counter_errors() {
        let mut c = counter(u32::MAX);
        let err = c.handle_action(SequenceAction::Next, &()).await.unwrap_err();
        assert!(matches!(err, SequenceError::Exhausted(_)));
    }
}
