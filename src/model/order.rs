//! The order record: one laundry cycle from drop-off to customer pickup.
//!
//! # Actor Framework
//! [`Order`] implements [`ActorEntity`](crate::framework::ActorEntity) in
//! `order_actor::entity`, where the transition rules live. This module only holds data
//! and read-side helpers.

use crate::model::{
    BagNumber, CellId, ClubId, OrderId, OrderNumber, PickupCode, ProofArtifact, ProofKind,
    SubPhase, UserId,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Order lifecycle: `Pending -> InProgress -> ReadyForPickup -> Completed`, with
/// `Canceled` reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Items are in the drop-off cell, waiting for the courier.
    Pending,
    /// With the courier or at the laundry.
    InProgress,
    /// Clean items are in a pickup cell.
    ReadyForPickup,
    Completed,
    Canceled,
}

impl OrderStatus {
    /// Legacy numeric status code (1..=5) used by existing clients and reports.
    pub fn code(self) -> u8 {
        match self {
            OrderStatus::Pending => 1,
            OrderStatus::InProgress => 2,
            OrderStatus::ReadyForPickup => 3,
            OrderStatus::Completed => 4,
            OrderStatus::Canceled => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(OrderStatus::Pending),
            2 => Some(OrderStatus::InProgress),
            3 => Some(OrderStatus::ReadyForPickup),
            4 => Some(OrderStatus::Completed),
            5 => Some(OrderStatus::Canceled),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Canceled)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in progress",
            OrderStatus::ReadyForPickup => "ready for pickup",
            OrderStatus::Completed => "completed",
            OrderStatus::Canceled => "canceled",
        };
        f.write_str(name)
    }
}

/// Who filed an issue report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueReporter {
    Customer(UserId),
    Staff(Option<UserId>),
}

/// A problem flagged on an order (damaged item, missing bag, ...).
/// Informational only: it never changes status or sub-phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueReport {
    pub reporter: IssueReporter,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub club_id: ClubId,
    pub status: OrderStatus,
    pub order_number: OrderNumber,
    pub daily_sequence: u32,
    /// Local calendar day the daily sequence was drawn for.
    pub created_date: NaiveDate,
    pub pickup_code: PickupCode,
    /// Set while the items physically sit in a cell.
    pub locker_cell: Option<CellId>,
    pub bag_number: Option<BagNumber>,
    pub comment: Option<String>,
    pub proofs: Vec<ProofArtifact>,
    pub issues: Vec<IssueReport>,
    pub cancel_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for a customer drop-off.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub club_id: ClubId,
    pub cell: CellId,
    pub comment: Option<String>,
}

/// What the tablet shows the customer after a drop-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    pub order_number: OrderNumber,
    pub pickup_code: PickupCode,
    pub bag_number: Option<BagNumber>,
}

/// Compact view of an order returned by transitions and lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub order_number: OrderNumber,
    pub user_id: UserId,
    pub club_id: ClubId,
    pub status: OrderStatus,
    pub sub_phase: Option<SubPhase>,
    pub locker_cell: Option<CellId>,
    pub bag_number: Option<BagNumber>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn has_proof(&self, kind: ProofKind) -> bool {
        self.proofs.iter().any(|p| p.kind == kind)
    }

    /// The processing phase, defined only while the order is `InProgress`.
    pub fn sub_phase(&self) -> Option<SubPhase> {
        (self.status == OrderStatus::InProgress)
            .then(|| SubPhase::infer(self.proofs.iter().map(|p| p.kind)))
    }

    /// Most recent artifact of each kind, in chain order.
    pub fn latest_proofs(&self) -> Vec<ProofArtifact> {
        [ProofKind::Received, ProofKind::Processed, ProofKind::Ready]
            .into_iter()
            .filter_map(|kind| {
                self.proofs
                    .iter()
                    .filter(|p| p.kind == kind)
                    .max_by_key(|p| p.created_at)
                    .cloned()
            })
            .collect()
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id,
            order_number: self.order_number.clone(),
            user_id: self.user_id,
            club_id: self.club_id,
            status: self.status,
            sub_phase: self.sub_phase(),
            locker_cell: self.locker_cell.clone(),
            bag_number: self.bag_number.clone(),
            updated_at: self.updated_at,
        }
    }

    pub fn receipt(&self) -> OrderReceipt {
        OrderReceipt {
            order_id: self.id,
            order_number: self.order_number.clone(),
            pickup_code: self.pickup_code.clone(),
            bag_number: self.bag_number.clone(),
        }
    }
}
