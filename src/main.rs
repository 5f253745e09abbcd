//! # Laundry Locker demo
//!
//! Runs one customer through the service end to end:
//! 1. Starts the [`LaundrySystem`] from the environment configuration.
//! 2. Registers a customer through phone verification.
//! 3. Walks one order from drop-off to pickup.
//!
//! Without WhatsApp credentials every message (including the verification code) is
//! written to the log.

use laundry_locker::config::AppConfig;
use laundry_locker::framework::ActorClient;
use laundry_locker::lifecycle::{setup_tracing, LaundrySystem};
use laundry_locker::model::{CellId, ClubCode, ClubCreate, OrderCreate, Phone, ProofUpload};
use laundry_locker::order_actor::OrderAction;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    info!("Starting laundry locker demo");
    let system = LaundrySystem::from_config(config);

    let club_id = system
        .create_club(ClubCreate {
            name: "FitCity Dostyk".to_string(),
            code: ClubCode::parse("FC").map_err(|e| e.to_string())?,
        })
        .await
        .map_err(|e| e.to_string())?;

    // Registration: the demo plays the customer and reads the pending code back.
    let phone = Phone::parse("+7 701 234 56 78").map_err(|e| e.to_string())?;
    let span = tracing::info_span!("registration");
    let user_id = async {
        system
            .issue_verification_code(phone.clone())
            .await
            .map_err(|e| e.to_string())?;
        let pending = system
            .verification
            .get(phone.clone())
            .await
            .map_err(|e| e.to_string())?
            .ok_or("verification code vanished")?;
        system
            .register_user(phone, &pending.code, "Aigerim".to_string(), Some(club_id))
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(user_id = %user_id, "Customer registered");

    let span = tracing::info_span!("order_processing");
    let result = async {
        let receipt = system
            .create_order(OrderCreate {
                user_id,
                club_id,
                cell: CellId::new("A1"),
                comment: Some("Gym towels, 40 degrees".to_string()),
            })
            .await?;
        let id = receipt.order_id;
        info!(order_number = %receipt.order_number, "Bag dropped off");

        let steps = [
            OrderAction::CourierPickup { bag_number: None },
            OrderAction::ReceiveAtLaundry {
                proof: ProofUpload::new("photos/received.jpg"),
                bag_number: None,
            },
            OrderAction::MarkWashed {
                proof: ProofUpload::new("photos/washed.jpg"),
            },
            OrderAction::Pack {
                proof: ProofUpload::new("photos/packed.jpg"),
            },
            OrderAction::CourierDeliver {
                cell: CellId::new("B4"),
            },
        ];
        for step in steps {
            let summary = system.transition(id, step).await?;
            info!(status = %summary.status, sub_phase = ?summary.sub_phase, "Order moved");
        }

        let ready = system
            .verify_pickup_code(&receipt.pickup_code, Some(club_id))
            .await?;
        info!(order_id = %ready.id, cell = ?ready.locker_cell, "Pickup code accepted");
        system
            .transition(id, OrderAction::CompletePickup { requester: user_id })
            .await
    }
    .instrument(span)
    .await;

    match result {
        Ok(summary) => info!(order_id = %summary.id, status = %summary.status, "Order completed"),
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
