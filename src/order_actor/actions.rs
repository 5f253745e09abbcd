//! Custom actions for the Order actor: the workflow transitions.

use crate::model::{BagNumber, CellId, IssueReporter, OrderSummary, ProofUpload, UserId};
use crate::notification::OrderEventKind;

#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Courier takes the dirty bag out of the drop-off cell, optionally relabelling it.
    CourierPickup { bag_number: Option<BagNumber> },
    /// Laundry takes the bag in.
    ReceiveAtLaundry {
        proof: ProofUpload,
        bag_number: Option<BagNumber>,
    },
    MarkWashed { proof: ProofUpload },
    Pack { proof: ProofUpload },
    /// Courier puts the clean bag into a pickup cell.
    CourierDeliver { cell: CellId },
    /// Customer takes the items out.
    CompletePickup { requester: UserId },
    Cancel { reason: Option<String> },
    ReportIssue {
        reporter: IssueReporter,
        description: String,
    },
}

impl OrderAction {
    pub fn name(&self) -> &'static str {
        match self {
            OrderAction::CourierPickup { .. } => "courier_pickup",
            OrderAction::ReceiveAtLaundry { .. } => "receive_at_laundry",
            OrderAction::MarkWashed { .. } => "mark_washed",
            OrderAction::Pack { .. } => "pack",
            OrderAction::CourierDeliver { .. } => "courier_deliver",
            OrderAction::CompletePickup { .. } => "complete_pickup",
            OrderAction::Cancel { .. } => "cancel",
            OrderAction::ReportIssue { .. } => "report_issue",
        }
    }
}

/// A committed transition: the new state and the event to announce, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTransition {
    pub summary: OrderSummary,
    pub event: Option<OrderEventKind>,
}
