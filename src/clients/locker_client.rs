//! # Locker Client
//!
//! High-level API of the Locker Cell Ledger.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::locker_actor::{LockerAction, LockerActionResult, LockerError};
use crate::model::{CellKey, LockerCell, OrderId};
use async_trait::async_trait;
use tracing::{info, instrument};

/// Client for interacting with the Locker actor.
#[derive(Clone, Debug)]
pub struct LockerClient {
    inner: ResourceClient<LockerCell>,
}

impl LockerClient {
    pub fn new(inner: ResourceClient<LockerCell>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<LockerCell> for LockerClient {
    type Error = LockerError;

    fn inner(&self) -> &ResourceClient<LockerCell> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<LockerError>()
            .unwrap_or_else(|other| LockerError::ActorCommunicationError(other.to_string()))
    }
}

impl LockerClient {
    /// Assigns the cell to `order` if nobody else holds it.
    #[instrument(skip(self))]
    pub async fn claim(&self, key: CellKey, order: OrderId) -> Result<(), LockerError> {
        match self
            .inner
            .perform_action(key, LockerAction::Claim(order))
            .await
            .map_err(Self::map_error)?
        {
            LockerActionResult::Claim(()) => Ok(()),
            LockerActionResult::Release(_) => unreachable!("Claim action must return Claim result"),
        }
    }

    /// Frees the cell if `order` holds it; returns whether it did.
    #[instrument(skip(self))]
    pub async fn release(&self, key: CellKey, order: OrderId) -> Result<bool, LockerError> {
        match self
            .inner
            .perform_action(key, LockerAction::Release(order))
            .await
            .map_err(Self::map_error)?
        {
            LockerActionResult::Release(released) => Ok(released),
            LockerActionResult::Claim(()) => unreachable!("Release action must return Release result"),
        }
    }

    pub async fn occupant(&self, key: CellKey) -> Result<Option<OrderId>, LockerError> {
        Ok(self.get(key).await?.and_then(|cell| cell.occupant))
    }

    /// Records an existing occupancy, e.g. when restoring state after a restart.
    /// Follows the `claim` rules, so a cell held by another order is never taken over.
    #[instrument(skip(self))]
    pub async fn seed(&self, key: CellKey, occupant: OrderId) -> Result<(), LockerError> {
        self.claim(key, occupant).await?;
        info!("Occupancy restored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_get};
    use crate::model::{CellId, ClubId};

    fn a1() -> CellKey {
        CellKey::new(ClubId(1), CellId::new("A1"))
    }

    #[tokio::test]
    async fn test_claim_surfaces_occupant() {
        let (client, mut receiver) = create_mock_client::<LockerCell>(10);
        let locker_client = LockerClient::new(client);

        let claim_task = tokio::spawn(async move { locker_client.claim(a1(), OrderId(2)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, a1());
        assert_eq!(action, LockerAction::Claim(OrderId(2)));

        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                LockerError::CellOccupied {
                    cell: a1(),
                    holder: OrderId(1),
                },
            ))))
            .unwrap();

        let result = claim_task.await.unwrap();
        assert!(matches!(
            result,
            Err(LockerError::CellOccupied { holder: OrderId(1), .. })
        ));
    }

    #[tokio::test]
    async fn test_occupant_of_vacant_cell() {
        let (client, mut receiver) = create_mock_client::<LockerCell>(10);
        let locker_client = LockerClient::new(client);

        let task = tokio::spawn(async move { locker_client.occupant(a1()).await });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, a1());
        responder.send(Ok(Some(LockerCell::free(a1())))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), None);
    }

    #[tokio::test]
    async fn test_seed_cannot_evict_holder() {
        let (client, mut receiver) = create_mock_client::<LockerCell>(10);
        let locker_client = LockerClient::new(client);

        let task = tokio::spawn(async move { locker_client.seed(a1(), OrderId(5)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, a1());
        assert_eq!(action, LockerAction::Claim(OrderId(5)));
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                LockerError::CellOccupied {
                    cell: a1(),
                    holder: OrderId(4),
                },
            ))))
            .unwrap();

        assert!(matches!(
            task.await.unwrap(),
            Err(LockerError::CellOccupied { holder: OrderId(4), .. })
        ));
    }
}
