//! Message texts. Kept short and neutral; clubs localize on their side.

use crate::notification::{OrderEvent, OrderEventKind};

/// Customer-facing text for an event. `club_name` falls back to the club id.
pub fn customer_message(event: &OrderEvent, club_name: Option<&str>) -> String {
    let number = &event.order_number;
    match &event.kind {
        OrderEventKind::Accepted => format!(
            "Your order #{number} has been accepted and will go to the laundry soon. \
             We will let you know when washing starts."
        ),
        OrderEventKind::ReceivedAtLaundry { bag_number } => match bag_number {
            Some(bag) => format!(
                "Your items have arrived at the laundry and will be washed shortly. Bag number: {bag}."
            ),
            None => "Your items have arrived at the laundry and will be washed shortly.".to_string(),
        },
        OrderEventKind::Washed => {
            "Your items are washed and getting their final preparation. \
             They will be ready for pickup soon."
                .to_string()
        }
        OrderEventKind::ReadyForPickup { cell } => {
            let club = club_name.map_or_else(|| event.club_id.to_string(), str::to_string);
            format!("Your items are ready for pickup at {club}, cell #{cell}.")
        }
        OrderEventKind::Completed => {
            format!("Your order #{number} is complete. Thank you for using our service!")
        }
        OrderEventKind::Canceled => format!("Your order #{number} has been canceled."),
        OrderEventKind::IssueReported { .. } => format!(
            "We have registered an issue with order #{number}. Our team will contact you shortly."
        ),
    }
}

/// Staff alert for issue reports; `None` for every other event.
pub fn admin_alert(event: &OrderEvent) -> Option<String> {
    match &event.kind {
        OrderEventKind::IssueReported { description } => Some(format!(
            "Issue reported on order #{} ({}): {description}",
            event.order_number, event.order_id
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellId, ClubCode, ClubId, OrderId, OrderNumber, UserId};
    use chrono::NaiveDate;

    fn event(kind: OrderEventKind) -> OrderEvent {
        OrderEvent {
            order_id: OrderId(1),
            order_number: OrderNumber::new(
                NaiveDate::from_ymd_opt(2026, 2, 16).unwrap(),
                ClubCode::parse("FC").unwrap(),
                1,
            ),
            user_id: UserId(1),
            club_id: ClubId(3),
            kind,
        }
    }

    #[test]
    fn ready_message_names_club_and_cell() {
        let e = event(OrderEventKind::ReadyForPickup {
            cell: CellId::new("B4"),
        });
        let text = customer_message(&e, Some("Fit Central"));
        assert!(text.contains("Fit Central"));
        assert!(text.contains("#B4"));
        assert!(customer_message(&e, None).contains("club_3"));
    }

    #[test]
    fn only_issues_alert_admins() {
        assert!(admin_alert(&event(OrderEventKind::Completed)).is_none());
        let alert = admin_alert(&event(OrderEventKind::IssueReported {
            description: "torn bag".into(),
        }))
        .unwrap();
        assert!(alert.contains("20260216-FC-001"));
        assert!(alert.contains("torn bag"));
    }
}
