//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>`, hands committed transition events to the
//! [`NotificationDispatcher`], and answers the staff and courier work queues.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{
    ClubId, Order, OrderCreate, OrderId, OrderReceipt, OrderStatus, OrderSummary, PickupCode,
    ProofArtifact, SubPhase, UserId,
};
use crate::notification::{NotificationDispatcher, OrderEvent, OrderEventKind};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Order actor.
///
/// Orchestration (user/club validation, cell claim, number allocation) happens in the
/// Order actor's creation hook; this client only adds notification and queries.
#[derive(Clone, Debug)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    notifier: NotificationDispatcher,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, notifier: NotificationDispatcher) -> Self {
        Self { inner, notifier }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

/// `None` matches every club.
fn in_club(club: Option<ClubId>, order: &Order) -> bool {
    club.map_or(true, |c| order.club_id == c)
}

fn oldest_first(mut orders: Vec<Order>) -> Vec<OrderSummary> {
    orders.sort_by_key(|o| (o.created_at, o.id));
    orders.iter().map(Order::summary).collect()
}

impl OrderClient {
    /// Customer drop-off. Announces `Accepted` once the order is stored.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderReceipt, OrderError> {
        debug!("create_order called");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        let order = self.order(id).await?;

        info!(order_id = %id, order_number = %order.order_number, "Order created");
        self.notifier
            .dispatch(OrderEvent::new(&order.summary(), OrderEventKind::Accepted));
        Ok(order.receipt())
    }

    /// Applies a workflow transition and announces it when it carries an event.
    #[instrument(skip(self, action), fields(action = action.name()))]
    pub async fn transition(
        &self,
        id: OrderId,
        action: OrderAction,
    ) -> Result<OrderSummary, OrderError> {
        debug!(?action, "transition called");
        let outcome = self
            .inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)?;

        info!(order_id = %id, status = %outcome.summary.status, "Transition committed");
        if let Some(kind) = outcome.event {
            self.notifier.dispatch(OrderEvent::new(&outcome.summary, kind));
        }
        Ok(outcome.summary)
    }

    /// Fetches an order, failing with `NotFound` when it does not exist.
    pub async fn order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// `None` unless the order is `InProgress`.
    pub async fn sub_phase(&self, id: OrderId) -> Result<Option<SubPhase>, OrderError> {
        Ok(self.order(id).await?.sub_phase())
    }

    /// Finds the order awaiting pickup under `code`, optionally within one club.
    ///
    /// Codes are not unique; only orders currently `ReadyForPickup` are candidates. Should
    /// two outstanding orders share a code, the most recently delivered one wins.
    #[instrument(skip(self, code))]
    pub async fn verify_pickup_code(
        &self,
        code: &PickupCode,
        club: Option<ClubId>,
    ) -> Result<OrderSummary, OrderError> {
        let wanted = code.clone();
        let mut matches = self
            .find(move |o: &Order| {
                o.status == OrderStatus::ReadyForPickup
                    && o.pickup_code == wanted
                    && in_club(club, o)
            })
            .await?;

        if matches.len() > 1 {
            warn!(count = matches.len(), "Pickup code shared by outstanding orders");
        }
        matches.sort_by_key(|o| o.updated_at);
        matches
            .pop()
            .map(|o| o.summary())
            .ok_or_else(|| OrderError::NotFound(format!("pickup code {code}")))
    }

    /// Orders of `club` matching `predicate`, oldest first.
    async fn queue<F>(
        &self,
        club: Option<ClubId>,
        predicate: F,
    ) -> Result<Vec<OrderSummary>, OrderError>
    where
        F: Fn(&Order) -> bool + Send + Sync + 'static,
    {
        let orders = self
            .find(move |o: &Order| in_club(club, o) && predicate(o))
            .await?;
        Ok(oldest_first(orders))
    }

    /// Drop-offs still sitting in a cell, waiting for the courier.
    pub async fn awaiting_courier_pickup(
        &self,
        club: Option<ClubId>,
    ) -> Result<Vec<OrderSummary>, OrderError> {
        self.queue(club, |o| {
            o.status == OrderStatus::Pending && o.locker_cell.is_some()
        })
        .await
    }

    /// Picked up by the courier, not yet received at the laundry.
    pub async fn awaiting_receipt(
        &self,
        club: Option<ClubId>,
    ) -> Result<Vec<OrderSummary>, OrderError> {
        self.queue(club, |o| o.sub_phase() == Some(SubPhase::AwaitingReceipt))
            .await
    }

    pub async fn in_washing(&self, club: Option<ClubId>) -> Result<Vec<OrderSummary>, OrderError> {
        self.queue(club, |o| o.sub_phase() == Some(SubPhase::Washing))
            .await
    }

    pub async fn ready_to_pack(
        &self,
        club: Option<ClubId>,
    ) -> Result<Vec<OrderSummary>, OrderError> {
        self.queue(club, |o| o.sub_phase() == Some(SubPhase::Washed))
            .await
    }

    /// Packed bags waiting for the courier to deliver them to a pickup cell.
    pub async fn awaiting_delivery(
        &self,
        club: Option<ClubId>,
    ) -> Result<Vec<OrderSummary>, OrderError> {
        self.queue(club, |o| o.sub_phase() == Some(SubPhase::Packed))
            .await
    }

    /// The customer's orders that can be collected now.
    pub async fn ready_orders_for(&self, user: UserId) -> Result<Vec<OrderSummary>, OrderError> {
        self.queue(None, move |o| {
            o.user_id == user && o.status == OrderStatus::ReadyForPickup
        })
        .await
    }

    /// Latest artifact of each kind recorded for the order.
    pub async fn proofs(&self, id: OrderId) -> Result<Vec<ProofArtifact>, OrderError> {
        Ok(self.order(id).await?.latest_proofs())
    }
}
