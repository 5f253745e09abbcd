use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use laundry_locker::clients::{ClubClient, LockerClient, OrderClient, SequenceClient, UserClient};
use laundry_locker::clock::FixedClock;
use laundry_locker::framework::mock::MockClient;
use laundry_locker::framework::{ActorClient, FrameworkError};
use laundry_locker::locker_actor::{LockerActionResult, LockerError};
use laundry_locker::model::{
    CellId, CellKey, Club, ClubCode, ClubId, LockerCell, OrderCreate, OrderId, OrderStatus,
    Phone, SequenceCounter, SequenceKey, User, UserId,
};
use laundry_locker::notification::{LogGateway, NotificationDispatcher};
use laundry_locker::order_actor::{OrderAction, OrderContext, OrderError};
use laundry_locker::sequence_actor::{SequenceActionResult, SequenceError};
use std::sync::Arc;
use tokio::task::JoinHandle;

struct Mocks {
    users: MockClient<User>,
    clubs: MockClient<Club>,
    sequences: MockClient<SequenceCounter>,
    lockers: MockClient<LockerCell>,
}

impl Mocks {
    fn new() -> Self {
        Self {
            users: MockClient::new(),
            clubs: MockClient::new(),
            sequences: MockClient::new(),
            lockers: MockClient::new(),
        }
    }

    fn verify(&self) {
        self.users.verify();
        self.clubs.verify();
        self.sequences.verify();
        self.lockers.verify();
    }

    /// The directory lookups every drop-off starts with.
    fn expect_directories(&mut self) {
        self.users.expect_get(UserId(1)).return_ok(Some(User {
            id: UserId(1),
            phone: Phone::parse("77011112233").unwrap(),
            username: "Aigerim".to_string(),
            club_id: None,
            registered_at: Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).unwrap(),
        }));
        self.clubs.expect_get(ClubId(1)).return_ok(Some(Club {
            id: ClubId(1),
            name: "FitCity".to_string(),
            code: ClubCode::parse("FC").unwrap(),
        }));
    }
}

fn cell_a1() -> CellKey {
    CellKey::new(ClubId(1), CellId::new("A1"))
}

fn daily_key() -> SequenceKey {
    SequenceKey::Daily {
        club: ClubId(1),
        day: NaiveDate::from_ymd_opt(2026, 2, 16).unwrap(),
    }
}

fn bag_key() -> SequenceKey {
    SequenceKey::Bag { club: ClubId(1) }
}

fn drop_off_a1() -> OrderCreate {
    OrderCreate {
        user_id: UserId(1),
        club_id: ClubId(1),
        cell: CellId::new("A1"),
        comment: Some("  delicate  ".to_string()),
    }
}

/// Spawns a REAL Order actor whose dependencies are the given mocks.
///
/// Notifications go to a log gateway backed by empty directories, so they never touch
/// the mocks.
fn spawn_order_actor(mocks: &Mocks) -> (OrderClient, JoinHandle<()>) {
    let (user_actor, notify_users) = laundry_locker::user_actor::new(8);
    let (club_actor, notify_clubs) = laundry_locker::club_actor::new(8);
    tokio::spawn(user_actor.run(()));
    tokio::spawn(club_actor.run(()));
    let notifier =
        NotificationDispatcher::new(Arc::new(LogGateway), notify_users, notify_clubs, None);

    let (order_actor, order_client) = laundry_locker::order_actor::new(8, notifier);
    let context = OrderContext {
        users: UserClient::new(mocks.users.client()),
        clubs: ClubClient::new(mocks.clubs.client()),
        sequences: SequenceClient::new(mocks.sequences.client()),
        lockers: LockerClient::new(mocks.lockers.client()),
        // 09:00 at UTC+5
        clock: Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2026, 2, 16, 4, 0, 0).unwrap(),
        )),
        local_offset: FixedOffset::east_opt(5 * 3600).unwrap(),
    };
    let handle = tokio::spawn(order_actor.run(context));
    (order_client, handle)
}

/// Pattern 2: Actor + Mocks
/// - Real Order actor (drop-off orchestration and the transition table)
/// - Mocked directories, allocator and ledger (isolates dependencies)
#[tokio::test]
async fn test_order_actor_with_mocked_dependencies() {
    let mut mocks = Mocks::new();

    // Drop-off: lookups, cell claim, daily number, bag number, in that order
    mocks.expect_directories();
    mocks
        .lockers
        .expect_action(cell_a1())
        .return_ok(LockerActionResult::Claim(()));
    mocks
        .sequences
        .expect_action(daily_key())
        .return_ok(SequenceActionResult::Next(7));
    mocks
        .sequences
        .expect_action(bag_key())
        .return_ok(SequenceActionResult::Next(12));
    // Courier pickup frees the drop-off cell
    mocks
        .lockers
        .expect_action(cell_a1())
        .return_ok(LockerActionResult::Release(true));

    let (order_client, actor_handle) = spawn_order_actor(&mocks);

    let receipt = order_client.create_order(drop_off_a1()).await;
    assert!(receipt.is_ok(), "Order creation failed: {:?}", receipt.err());
    let receipt = receipt.unwrap();
    assert_eq!(receipt.order_number.to_string(), "20260216-FC-007");
    assert_eq!(receipt.bag_number.unwrap().to_string(), "FC-0012");

    let order = order_client.get(receipt.order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.daily_sequence, 7);
    assert_eq!(order.comment.as_deref(), Some("delicate"));
    assert_eq!(order.locker_cell, Some(CellId::new("A1")));

    let summary = order_client
        .transition(
            receipt.order_id,
            OrderAction::CourierPickup { bag_number: None },
        )
        .await
        .unwrap();
    assert_eq!(summary.status, OrderStatus::InProgress);

    mocks.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_occupied_cell_stops_before_allocation() {
    let mut mocks = Mocks::new();
    mocks.expect_directories();
    mocks
        .lockers
        .expect_action(cell_a1())
        .return_err(FrameworkError::EntityError(Box::new(
            LockerError::CellOccupied {
                cell: cell_a1(),
                holder: OrderId(9),
            },
        )));
    // No sequence expectations: a rejected drop-off must not draw a number

    let (order_client, actor_handle) = spawn_order_actor(&mocks);

    let result = order_client.create_order(drop_off_a1()).await;
    assert!(matches!(result, Err(OrderError::AllocationConflict(_))));
    assert!(order_client.get(OrderId(1)).await.unwrap().is_none());

    mocks.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_bag_allocation_rolls_back_number_and_cell() {
    let mut mocks = Mocks::new();
    mocks.expect_directories();
    mocks
        .lockers
        .expect_action(cell_a1())
        .return_ok(LockerActionResult::Claim(()));
    mocks
        .sequences
        .expect_action(daily_key())
        .return_ok(SequenceActionResult::Next(3));
    mocks
        .sequences
        .expect_action(bag_key())
        .return_err(FrameworkError::EntityError(Box::new(
            SequenceError::Exhausted(bag_key().to_string()),
        )));
    // Compensation: hand the daily number back, then free the cell
    mocks
        .sequences
        .expect_action(daily_key())
        .return_ok(SequenceActionResult::Rollback(true));
    mocks
        .lockers
        .expect_action(cell_a1())
        .return_ok(LockerActionResult::Release(true));

    let (order_client, actor_handle) = spawn_order_actor(&mocks);

    let result = order_client.create_order(drop_off_a1()).await;
    assert!(matches!(result, Err(OrderError::AllocationConflict(_))));

    mocks.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let mut mocks = Mocks::new();
    mocks.users.expect_get(UserId(1)).return_ok(None);

    let (order_client, actor_handle) = spawn_order_actor(&mocks);

    let result = order_client.create_order(drop_off_a1()).await;
    assert!(matches!(result, Err(OrderError::NotFound(_))));

    mocks.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}
