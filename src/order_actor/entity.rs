//! [`ActorEntity`] implementation for [`Order`]: drop-off and the workflow transitions.

use super::actions::{OrderAction, OrderTransition};
use super::error::{OrderError, Precondition};
use super::OrderContext;
use crate::clock::local_day;
use crate::framework::ActorClient;
use crate::framework::ActorEntity;
use crate::model::{
    BagNumber, CellId, CellKey, Club, IssueReport, IssueReporter, Order, OrderCreate, OrderId,
    OrderNumber, OrderStatus, PickupCode, ProofKind, SequenceKey,
};
use crate::notification::OrderEventKind;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::convert::Infallible;
use tracing::{info, warn};

const MAX_TEXT_LEN: usize = 1000;

fn clean_text(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Draws the daily sequence and the bag number. If the bag allocation fails the daily
/// value is handed back, so a failed drop-off consumes no order number.
async fn allocate_numbers(
    ctx: &OrderContext,
    club: &Club,
    day: NaiveDate,
) -> Result<(u32, BagNumber), OrderError> {
    let seq = ctx.sequences.next_daily(club.id, day).await?;

    match ctx.sequences.next_bag(club.id).await {
        Ok(bag) => Ok((seq, BagNumber::initial(&club.code, bag))),
        Err(e) => {
            let daily = SequenceKey::Daily { club: club.id, day };
            match ctx.sequences.rollback(daily, seq).await {
                Ok(true) => {}
                Ok(false) => warn!(key = %daily, seq, "Sequence moved on, value skipped"),
                Err(err) => warn!(key = %daily, seq, error = %err, "Sequence rollback failed"),
            }
            Err(e.into())
        }
    }
}

impl Order {
    fn require_status(&self, expected: OrderStatus) -> Result<(), Precondition> {
        if self.status == expected {
            Ok(())
        } else {
            Err(Precondition::Status {
                expected,
                actual: self.status,
            })
        }
    }

    fn require_proof(&self, kind: ProofKind) -> Result<(), Precondition> {
        if self.has_proof(kind) {
            Ok(())
        } else {
            Err(Precondition::ProofMissing(kind))
        }
    }

    fn require_no_proof(&self, kind: ProofKind) -> Result<(), Precondition> {
        if self.has_proof(kind) {
            Err(Precondition::ProofRecorded(kind))
        } else {
            Ok(())
        }
    }

    /// Gives the cell back to the ledger. A cell that is no longer ours is only logged.
    async fn release_cell(&self, ctx: &OrderContext, cell: CellId) -> Result<(), OrderError> {
        let key = CellKey::new(self.club_id, cell);
        if !ctx.lockers.release(key.clone(), self.id).await? {
            warn!(order_id = %self.id, cell = %key, "Cell was not held by this order");
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = OrderAction;
    type ActionResult = OrderTransition;
    type Context = OrderContext;
    type Error = OrderError;

    fn assign_id(seq: u32, _params: &OrderCreate) -> OrderId {
        OrderId(seq)
    }

    /// Drop-off: validates the references, claims the cell, then allocates the
    /// identifiers. The cell claim is undone when allocation fails.
    async fn from_create_params(
        id: OrderId,
        params: OrderCreate,
        ctx: &OrderContext,
    ) -> Result<Self, OrderError> {
        let comment = clean_text(params.comment);
        if comment.as_ref().is_some_and(|c| c.chars().count() > MAX_TEXT_LEN) {
            return Err(OrderError::ValidationError("comment is too long".into()));
        }
        if params.cell.as_str().trim().is_empty() {
            return Err(OrderError::ValidationError("cell must not be empty".into()));
        }

        let user = ctx
            .users
            .get(params.user_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(params.user_id.to_string()))?;
        let club = ctx
            .clubs
            .get(params.club_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(params.club_id.to_string()))?;

        let cell_key = CellKey::new(club.id, params.cell.clone());
        ctx.lockers.claim(cell_key.clone(), id).await?;

        let now = ctx.clock.now();
        let day = local_day(now, ctx.local_offset);
        let (daily_sequence, bag_number) = match allocate_numbers(ctx, &club, day).await {
            Ok(numbers) => numbers,
            Err(e) => {
                if let Err(err) = ctx.lockers.release(cell_key.clone(), id).await {
                    warn!(order_id = %id, cell = %cell_key, error = %err, "Cell release failed");
                }
                return Err(e);
            }
        };

        let order_number = OrderNumber::new(day, club.code.clone(), daily_sequence);
        info!(order_id = %id, %order_number, cell = %cell_key, "Drop-off accepted");

        Ok(Self {
            id,
            user_id: user.id,
            club_id: club.id,
            status: OrderStatus::Pending,
            order_number,
            daily_sequence,
            created_date: day,
            pickup_code: PickupCode::generate(),
            locker_cell: Some(params.cell),
            bag_number: Some(bag_number),
            comment,
            proofs: Vec::new(),
            issues: Vec::new(),
            cancel_reason: None,
            created_at: now,
            updated_at: now,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &OrderContext) -> Result<(), OrderError> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<OrderTransition, OrderError> {
        let now = ctx.clock.now();

        let event = match action {
            OrderAction::CourierPickup { bag_number } => {
                self.require_status(OrderStatus::Pending)?;
                let cell = self
                    .locker_cell
                    .clone()
                    .ok_or(Precondition::CellNotAssigned)?;
                self.release_cell(ctx, cell).await?;
                self.locker_cell = None;
                self.status = OrderStatus::InProgress;
                if bag_number.is_some() {
                    self.bag_number = bag_number;
                }
                None
            }
            OrderAction::ReceiveAtLaundry { proof, bag_number } => {
                self.require_status(OrderStatus::InProgress)?;
                self.require_no_proof(ProofKind::Received)?;
                self.proofs.push(proof.into_artifact(ProofKind::Received, now));
                if bag_number.is_some() {
                    self.bag_number = bag_number;
                }
                Some(OrderEventKind::ReceivedAtLaundry {
                    bag_number: self.bag_number.clone(),
                })
            }
            OrderAction::MarkWashed { proof } => {
                self.require_status(OrderStatus::InProgress)?;
                self.require_proof(ProofKind::Received)?;
                self.require_no_proof(ProofKind::Processed)?;
                self.proofs.push(proof.into_artifact(ProofKind::Processed, now));
                Some(OrderEventKind::Washed)
            }
            OrderAction::Pack { proof } => {
                self.require_status(OrderStatus::InProgress)?;
                self.require_proof(ProofKind::Processed)?;
                self.require_no_proof(ProofKind::Ready)?;
                self.proofs.push(proof.into_artifact(ProofKind::Ready, now));
                None
            }
            OrderAction::CourierDeliver { cell } => {
                self.require_status(OrderStatus::InProgress)?;
                self.require_proof(ProofKind::Ready)?;
                ctx.lockers
                    .claim(CellKey::new(self.club_id, cell.clone()), self.id)
                    .await?;
                self.locker_cell = Some(cell.clone());
                self.status = OrderStatus::ReadyForPickup;
                Some(OrderEventKind::ReadyForPickup { cell })
            }
            OrderAction::CompletePickup { requester } => {
                if requester != self.user_id {
                    return Err(OrderError::Forbidden(format!(
                        "{requester} does not own {}",
                        self.id
                    )));
                }
                self.require_status(OrderStatus::ReadyForPickup)?;
                if let Some(cell) = self.locker_cell.take() {
                    self.release_cell(ctx, cell).await?;
                }
                self.status = OrderStatus::Completed;
                Some(OrderEventKind::Completed)
            }
            OrderAction::Cancel { reason } => {
                if self.status.is_terminal() {
                    return Err(Precondition::Terminal(self.status).into());
                }
                if let Some(cell) = self.locker_cell.take() {
                    self.release_cell(ctx, cell).await?;
                }
                self.status = OrderStatus::Canceled;
                self.cancel_reason = clean_text(reason);
                Some(OrderEventKind::Canceled)
            }
            OrderAction::ReportIssue {
                reporter,
                description,
            } => {
                let description = clean_text(Some(description))
                    .ok_or_else(|| OrderError::ValidationError("description is empty".into()))?;
                if description.chars().count() > MAX_TEXT_LEN {
                    return Err(OrderError::ValidationError("description is too long".into()));
                }
                if let IssueReporter::Customer(user) = reporter {
                    if user != self.user_id {
                        return Err(OrderError::Forbidden(format!(
                            "{user} does not own {}",
                            self.id
                        )));
                    }
                }
                self.issues.push(IssueReport {
                    reporter,
                    description: description.clone(),
                    created_at: now,
                });
                Some(OrderEventKind::IssueReported { description })
            }
        };

        self.updated_at = now;
        Ok(OrderTransition {
            summary: self.summary(),
            event,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClubCode, ClubId, ProofUpload, UserId};
    use chrono::{TimeZone, Utc};

    fn order(status: OrderStatus, kinds: &[ProofKind]) -> Order {
        let now = Utc.with_ymd_and_hms(2026, 2, 16, 9, 0, 0).unwrap();
        let day = NaiveDate::from_ymd_opt(2026, 2, 16).unwrap();
        Order {
            id: OrderId(1),
            user_id: UserId(1),
            club_id: ClubId(1),
            status,
            order_number: OrderNumber::new(day, ClubCode::parse("FC").unwrap(), 1),
            daily_sequence: 1,
            created_date: day,
            pickup_code: PickupCode::parse("4821").unwrap(),
            locker_cell: None,
            bag_number: None,
            comment: None,
            proofs: kinds
                .iter()
                .map(|k| ProofUpload::new("photo").into_artifact(*k, now))
                .collect(),
            issues: Vec::new(),
            cancel_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn status_guard_reports_expected_and_actual() {
        let o = order(OrderStatus::InProgress, &[]);
        assert_eq!(o.require_status(OrderStatus::InProgress), Ok(()));
        assert_eq!(
            o.require_status(OrderStatus::Pending),
            Err(Precondition::Status {
                expected: OrderStatus::Pending,
                actual: OrderStatus::InProgress,
            })
        );
    }

    #[test]
    fn proof_guards() {
        let o = order(OrderStatus::InProgress, &[ProofKind::Received]);
        assert_eq!(o.require_proof(ProofKind::Received), Ok(()));
        assert_eq!(
            o.require_proof(ProofKind::Processed),
            Err(Precondition::ProofMissing(ProofKind::Processed))
        );
        assert_eq!(
            o.require_no_proof(ProofKind::Received),
            Err(Precondition::ProofRecorded(ProofKind::Received))
        );
        assert_eq!(o.require_no_proof(ProofKind::Ready), Ok(()));
    }

    #[test]
    fn sub_phase_only_while_in_progress() {
        let kinds = [ProofKind::Received, ProofKind::Processed];
        assert_eq!(
            order(OrderStatus::InProgress, &kinds).sub_phase(),
            Some(crate::model::SubPhase::Washed)
        );
        assert_eq!(order(OrderStatus::ReadyForPickup, &kinds).sub_phase(), None);
        assert_eq!(order(OrderStatus::Pending, &[]).sub_phase(), None);
    }
}
