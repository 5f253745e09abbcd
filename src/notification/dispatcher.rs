use crate::clients::{ClubClient, UserClient};
use crate::framework::ActorClient;
use crate::model::Phone;
use crate::notification::render::{admin_alert, customer_message};
use crate::notification::{GatewayError, NotificationGateway, OrderEvent};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn, Instrument};

/// Hands order events to the gateway, best effort.
///
/// Each dispatch is one detached task with a single delivery attempt. Failures are
/// logged and dropped; they never reach the caller of the transition that produced the
/// event, and never undo it.
#[derive(Clone, Debug)]
pub struct NotificationDispatcher {
    gateway: Arc<dyn NotificationGateway>,
    users: UserClient,
    clubs: ClubClient,
    admin_phone: Option<Phone>,
}

impl NotificationDispatcher {
    pub fn new(
        gateway: Arc<dyn NotificationGateway>,
        users: UserClient,
        clubs: ClubClient,
        admin_phone: Option<Phone>,
    ) -> Self {
        Self {
            gateway,
            users,
            clubs,
            admin_phone,
        }
    }

    /// Direct delivery for callers that need the outcome (verification codes).
    pub async fn send_now(
        &self,
        recipient: &Phone,
        message: &str,
    ) -> Result<(), GatewayError> {
        self.gateway.send(recipient, message).await
    }

    pub fn dispatch(&self, event: OrderEvent) -> JoinHandle<()> {
        let this = self.clone();
        let span = tracing::info_span!("notify", order_id = %event.order_id);
        tokio::spawn(async move { this.deliver(event).await }.instrument(span))
    }

    async fn deliver(&self, event: OrderEvent) {
        debug!(kind = ?event.kind, "Delivering notification");

        if let (Some(admin), Some(alert)) = (&self.admin_phone, admin_alert(&event)) {
            if let Err(e) = self.gateway.send(admin, &alert).await {
                warn!(error = %e, "Admin alert failed");
            }
        }

        let user = match self.users.get(event.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!(user_id = %event.user_id, "Recipient unknown, notification dropped");
                return;
            }
            Err(e) => {
                warn!(error = %e, "Recipient lookup failed, notification dropped");
                return;
            }
        };
        let club_name = match self.clubs.get(event.club_id).await {
            Ok(club) => club.map(|c| c.name),
            Err(e) => {
                debug!(error = %e, "Club lookup failed");
                None
            }
        };

        let message = customer_message(&event, club_name.as_deref());
        match self.gateway.send(&user.phone, &message).await {
            Ok(()) => debug!(to = %user.phone, "Notification delivered"),
            Err(e) => warn!(to = %user.phone, error = %e, "Notification failed"),
        }
    }
}
