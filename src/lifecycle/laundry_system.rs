use crate::clients::{
    ClubClient, LockerClient, OrderClient, SequenceClient, UserClient, VerificationClient,
};
use crate::clock::{SharedClock, SystemClock};
use crate::club_actor::ClubError;
use crate::config::{AppConfig, VerificationPolicy};
use crate::framework::ActorClient;
use crate::model::{
    ClubCreate, ClubId, OrderCreate, OrderId, OrderReceipt, OrderSummary, Phone, PickupCode,
    ProofArtifact, SubPhase, User, UserCreate, UserId, VerificationCheck, VerificationIssue,
};
use crate::notification::{
    LogGateway, NotificationDispatcher, NotificationGateway, WhatsAppGateway,
};
use crate::order_actor::{OrderAction, OrderContext, OrderError};
use crate::user_actor::UserError;
use crate::verification_actor::{VerificationContext, VerificationError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

/// Why a phone-verified registration did not produce a user.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistrationError {
    /// The submitted code was wrong; the caller may retry with the same code pending.
    #[error("Verification code rejected, {remaining_attempts} attempts left")]
    CodeRejected { remaining_attempts: u32 },

    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    User(#[from] UserError),
}

/// The orchestrator of the laundry-locker service.
///
/// `LaundrySystem` starts one actor per entity type, wires their dependencies, and exposes
/// the operations of the service as a facade over the typed clients:
///
/// - **Users / Clubs**: the directories an order references
/// - **Sequences**: per-(club, day) order counters and per-club bag counters
/// - **Lockers**: the cell occupancy ledger
/// - **Verification**: pending one-time codes keyed by phone
/// - **Orders**: the order state machine, depending on all of the above
///
/// Every store lives exactly as long as the system; nothing is process-wide.
///
/// # Example
///
/// ```ignore
/// let system = LaundrySystem::from_config(AppConfig::from_env()?);
///
/// system.issue_verification_code(phone.clone()).await?;
/// let user_id = system.register_user(phone, &code, "Aigerim".into(), None).await?;
/// let receipt = system.create_order(order_data).await?;
///
/// system.shutdown().await?;
/// ```
#[derive(Debug)]
pub struct LaundrySystem {
    pub orders: OrderClient,
    pub users: UserClient,
    pub clubs: ClubClient,
    pub sequences: SequenceClient,
    pub lockers: LockerClient,
    pub verification: VerificationClient,

    notifier: NotificationDispatcher,
    policy: VerificationPolicy,
    clock: SharedClock,

    /// Task handles for all running actors, orders first (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl LaundrySystem {
    /// Picks the WhatsApp gateway when credentials are configured, the log gateway
    /// otherwise, and runs on the system clock.
    pub fn from_config(config: AppConfig) -> Self {
        let gateway: Arc<dyn NotificationGateway> = match config.whatsapp.clone() {
            Some(whatsapp) => Arc::new(WhatsAppGateway::new(whatsapp)),
            None => {
                warn!("No WhatsApp credentials, notifications go to the log");
                Arc::new(LogGateway)
            }
        };
        Self::new(config, gateway, Arc::new(SystemClock))
    }

    /// Creates and starts every actor.
    ///
    /// 1. Creates the leaf actors (no dependencies)
    /// 2. Builds the notification dispatcher from the user and club clients
    /// 3. Creates the Order actor with the dispatcher
    /// 4. Spawns each actor with its context injected
    pub fn new(
        config: AppConfig,
        gateway: Arc<dyn NotificationGateway>,
        clock: SharedClock,
    ) -> Self {
        let capacity = config.mailbox_capacity;

        // 1. Create actors
        let (user_actor, users) = crate::user_actor::new(capacity);
        let (club_actor, clubs) = crate::club_actor::new(capacity);
        let (sequence_actor, sequences) = crate::sequence_actor::new(capacity);
        let (locker_actor, lockers) = crate::locker_actor::new(capacity);
        let (verification_actor, verification) = crate::verification_actor::new(capacity);

        // 2-3. The dispatcher resolves recipients through the directories
        let notifier = NotificationDispatcher::new(
            gateway,
            users.clone(),
            clubs.clone(),
            config.admin_phone.clone(),
        );
        let (order_actor, orders) = crate::order_actor::new(capacity, notifier.clone());

        // 4. Start actors with injected context
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            users: users.clone(),
            clubs: clubs.clone(),
            sequences: sequences.clone(),
            lockers: lockers.clone(),
            clock: clock.clone(),
            local_offset: config.local_offset,
        }));
        let verification_handle = tokio::spawn(verification_actor.run(VerificationContext {
            policy: config.verification.clone(),
            clock: clock.clone(),
        }));
        let user_handle = tokio::spawn(user_actor.run(()));
        let club_handle = tokio::spawn(club_actor.run(()));
        let sequence_handle = tokio::spawn(sequence_actor.run(()));
        let locker_handle = tokio::spawn(locker_actor.run(()));

        info!(mailbox_capacity = capacity, "Laundry system started");

        Self {
            orders,
            users,
            clubs,
            sequences,
            lockers,
            verification,
            notifier,
            policy: config.verification,
            clock,
            handles: vec![
                order_handle,
                verification_handle,
                user_handle,
                club_handle,
                sequence_handle,
                locker_handle,
            ],
        }
    }

    // =========================================================================
    // Orders
    // =========================================================================

    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderReceipt, OrderError> {
        self.orders.create_order(params).await
    }

    pub async fn transition(
        &self,
        id: OrderId,
        action: OrderAction,
    ) -> Result<OrderSummary, OrderError> {
        self.orders.transition(id, action).await
    }

    pub async fn verify_pickup_code(
        &self,
        code: &PickupCode,
        club: Option<ClubId>,
    ) -> Result<OrderSummary, OrderError> {
        self.orders.verify_pickup_code(code, club).await
    }

    pub async fn infer_sub_phase(&self, id: OrderId) -> Result<Option<SubPhase>, OrderError> {
        self.orders.sub_phase(id).await
    }

    pub async fn awaiting_courier_pickup(
        &self,
        club: Option<ClubId>,
    ) -> Result<Vec<OrderSummary>, OrderError> {
        self.orders.awaiting_courier_pickup(club).await
    }

    pub async fn awaiting_receipt(
        &self,
        club: Option<ClubId>,
    ) -> Result<Vec<OrderSummary>, OrderError> {
        self.orders.awaiting_receipt(club).await
    }

    pub async fn in_washing(&self, club: Option<ClubId>) -> Result<Vec<OrderSummary>, OrderError> {
        self.orders.in_washing(club).await
    }

    pub async fn ready_to_pack(
        &self,
        club: Option<ClubId>,
    ) -> Result<Vec<OrderSummary>, OrderError> {
        self.orders.ready_to_pack(club).await
    }

    pub async fn awaiting_delivery(
        &self,
        club: Option<ClubId>,
    ) -> Result<Vec<OrderSummary>, OrderError> {
        self.orders.awaiting_delivery(club).await
    }

    pub async fn ready_orders_for(&self, user: UserId) -> Result<Vec<OrderSummary>, OrderError> {
        self.orders.ready_orders_for(user).await
    }

    pub async fn proofs(&self, id: OrderId) -> Result<Vec<ProofArtifact>, OrderError> {
        self.orders.proofs(id).await
    }

    // =========================================================================
    // Phone verification and registration
    // =========================================================================

    /// Stores a fresh code for `phone` and sends it, waiting for the gateway.
    /// A failed send is [`VerificationError::Delivery`]; issuing again replaces the code.
    #[instrument(skip(self))]
    pub async fn issue_verification_code(&self, phone: Phone) -> Result<(), VerificationError> {
        let issue =
            VerificationIssue::random(phone.clone(), self.policy.code_length, self.clock.now());
        let message = format!("Your verification code: {}", issue.code);
        self.verification.issue(issue).await?;

        self.notifier
            .send_now(&phone, &message)
            .await
            .map_err(|e| VerificationError::Delivery(e.to_string()))
    }

    pub async fn check_verification_code(
        &self,
        phone: Phone,
        code: &str,
    ) -> Result<VerificationCheck, VerificationError> {
        self.verification.check(phone, code).await
    }

    /// Creates a user once `code` proves control of `phone`.
    #[instrument(skip(self, code))]
    pub async fn register_user(
        &self,
        phone: Phone,
        code: &str,
        username: String,
        club_id: Option<ClubId>,
    ) -> Result<UserId, RegistrationError> {
        let check = self.verification.check(phone.clone(), code).await?;
        if !check.accepted {
            return Err(RegistrationError::CodeRejected {
                remaining_attempts: check.remaining_attempts,
            });
        }

        let id = self
            .users
            .create_user(UserCreate {
                phone,
                username,
                club_id,
                registered_at: self.clock.now(),
            })
            .await?;
        info!(user_id = %id, "User registered");
        Ok(id)
    }

    pub async fn create_club(&self, params: ClubCreate) -> Result<ClubId, ClubError> {
        self.clubs.create_club(params).await
    }

    /// Looks a registered user up by phone.
    pub async fn user_by_phone(&self, phone: Phone) -> Result<Option<User>, UserError> {
        self.users.find_by_phone(phone).await
    }

    /// Looks a user up by id.
    pub async fn user(&self, id: UserId) -> Result<Option<User>, UserError> {
        self.users.get(id).await
    }

    /// Gracefully shuts down the entire system.
    ///
    /// 1. Drops all clients (and the dispatcher), closing the mailboxes
    /// 2. Waits for every actor task, the Order actor first: it holds clients of the
    ///    other actors in its context until it exits
    ///
    /// Notification tasks still in flight keep the user and club actors alive until they
    /// finish their single attempt.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.orders);
        drop(self.notifier);
        drop(self.users);
        drop(self.clubs);
        drop(self.sequences);
        drop(self.lockers);
        drop(self.verification);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
