use crate::model::{BagNumber, CellId, ClubId, OrderId, OrderNumber, OrderSummary, UserId};
use serde::{Deserialize, Serialize};

/// A customer-visible order transition, emitted at most once per committed transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderEvent {
    pub order_id: OrderId,
    pub order_number: OrderNumber,
    pub user_id: UserId,
    pub club_id: ClubId,
    pub kind: OrderEventKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEventKind {
    Accepted,
    ReceivedAtLaundry { bag_number: Option<BagNumber> },
    Washed,
    ReadyForPickup { cell: CellId },
    Completed,
    Canceled,
    IssueReported { description: String },
}

impl OrderEvent {
    pub fn new(order: &OrderSummary, kind: OrderEventKind) -> Self {
        Self {
            order_id: order.id,
            order_number: order.order_number.clone(),
            user_id: order.user_id,
            club_id: order.club_id,
            kind,
        }
    }
}
