mod common;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use common::{club, customer, drop_off, start};
use laundry_locker::locker_actor::LockerError;
use laundry_locker::sequence_actor::SequenceError;
use laundry_locker::model::{CellId, CellKey, ClubId, OrderCreate, OrderId, SequenceKey};
use std::collections::HashSet;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_concurrent_drop_offs_get_consecutive_numbers() {
    let t = start();
    let club_id = club(&t.system, "FC").await;
    let user_id = customer(&t, "77011112233", "Aigerim").await;

    let first = tokio::spawn({
        let orders = t.system.orders.clone();
        async move {
            orders
                .create_order(OrderCreate {
                    user_id,
                    club_id,
                    cell: CellId::new("A1"),
                    comment: None,
                })
                .await
        }
    });
    let second = tokio::spawn({
        let orders = t.system.orders.clone();
        async move {
            orders
                .create_order(OrderCreate {
                    user_id,
                    club_id,
                    cell: CellId::new("A2"),
                    comment: None,
                })
                .await
        }
    });

    let a = first.await.unwrap().unwrap();
    let b = second.await.unwrap().unwrap();
    let numbers: HashSet<String> = [a.order_number.to_string(), b.order_number.to_string()]
        .into_iter()
        .collect();
    let expected: HashSet<String> = ["20260216-FC-001", "20260216-FC-002"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(numbers, expected);
}

#[tokio::test]
async fn test_many_concurrent_drop_offs_are_gap_free() {
    let t = start();
    let club_id = club(&t.system, "FC").await;
    let user_id = customer(&t, "77011112233", "Aigerim").await;

    let handles: Vec<_> = (1..=20)
        .map(|n| {
            let orders = t.system.orders.clone();
            tokio::spawn(async move {
                orders
                    .create_order(OrderCreate {
                        user_id,
                        club_id,
                        cell: CellId::new(format!("C{n}")),
                        comment: None,
                    })
                    .await
            })
        })
        .collect();

    let mut sequences = Vec::new();
    let mut bags = HashSet::new();
    for handle in handles {
        let receipt = handle.await.unwrap().unwrap();
        sequences.push(receipt.order_number.seq());
        bags.insert(receipt.bag_number.unwrap());
    }
    sequences.sort_unstable();
    assert_eq!(sequences, (1..=20).collect::<Vec<u32>>());
    assert_eq!(bags.len(), 20);

    let key = SequenceKey::Daily {
        club: club_id,
        day: day(2026, 2, 16),
    };
    assert_eq!(t.system.sequences.current(key).await.unwrap(), 20);
}

#[tokio::test]
async fn test_concurrent_claims_on_one_cell_have_one_winner() {
    let t = start();
    let key = CellKey::new(ClubId(1), CellId::new("A1"));

    let handles: Vec<_> = (1..=10)
        .map(|n| {
            let lockers = t.system.lockers.clone();
            let key = key.clone();
            tokio::spawn(async move { lockers.claim(key, OrderId(n)).await })
        })
        .collect();

    let mut winners = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => winners += 1,
            Err(LockerError::CellOccupied { cell, .. }) => assert_eq!(cell, key),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(winners, 1);
    assert!(t.system.lockers.occupant(key).await.unwrap().is_some());
}

#[tokio::test]
async fn test_cell_claim_is_idempotent_and_release_is_conditional() {
    let t = start();
    let lockers = &t.system.lockers;
    let key = CellKey::new(ClubId(1), CellId::new("A1"));

    lockers.claim(key.clone(), OrderId(1)).await.unwrap();
    lockers.claim(key.clone(), OrderId(1)).await.unwrap();
    assert!(!lockers.release(key.clone(), OrderId(2)).await.unwrap());
    assert_eq!(lockers.occupant(key.clone()).await.unwrap(), Some(OrderId(1)));
    assert!(lockers.release(key.clone(), OrderId(1)).await.unwrap());
    assert_eq!(lockers.occupant(key.clone()).await.unwrap(), None);
    assert!(!lockers.release(key, OrderId(1)).await.unwrap());
}

#[tokio::test]
async fn test_numbers_are_per_club_and_per_day() {
    let t = start();
    let fc = club(&t.system, "FC").await;
    let gym = club(&t.system, "GYM").await;
    let user_id = customer(&t, "77011112233", "Aigerim").await;

    assert_eq!(
        drop_off(&t.system, user_id, fc, "A1").await.order_number.to_string(),
        "20260216-FC-001"
    );
    assert_eq!(
        drop_off(&t.system, user_id, gym, "A1").await.order_number.to_string(),
        "20260216-GYM-001"
    );

    // Next local day: the daily counter restarts, the bag counter keeps going
    t.clock.advance(Duration::days(1));
    let receipt = drop_off(&t.system, user_id, fc, "A2").await;
    assert_eq!(receipt.order_number.to_string(), "20260217-FC-001");
    assert_eq!(receipt.bag_number.unwrap().to_string(), "FC-0002");
}

#[tokio::test]
async fn test_order_day_uses_local_offset() {
    let t = start();
    let fc = club(&t.system, "FC").await;
    let user_id = customer(&t, "77011112233", "Aigerim").await;

    // 20:30 UTC on the 15th is 01:30 on the 16th at UTC+5
    t.clock
        .set(Utc.with_ymd_and_hms(2026, 2, 15, 20, 30, 0).unwrap());
    let receipt = drop_off(&t.system, user_id, fc, "A1").await;
    assert_eq!(receipt.order_number.to_string(), "20260216-FC-001");
    let order = t.system.orders.order(receipt.order_id).await.unwrap();
    assert_eq!(order.created_date, day(2026, 2, 16));
}

#[tokio::test]
async fn test_rollback_only_undoes_the_latest_value() {
    let t = start();
    let sequences = &t.system.sequences;
    let club_id = ClubId(1);
    let key = SequenceKey::Daily {
        club: club_id,
        day: day(2026, 2, 16),
    };

    assert_eq!(sequences.next_daily(club_id, day(2026, 2, 16)).await.unwrap(), 1);
    assert_eq!(sequences.next_daily(club_id, day(2026, 2, 16)).await.unwrap(), 2);
    assert!(!sequences.rollback(key, 1).await.unwrap());
    assert!(sequences.rollback(key, 2).await.unwrap());
    assert_eq!(sequences.current(key).await.unwrap(), 1);
    assert_eq!(sequences.next_daily(club_id, day(2026, 2, 16)).await.unwrap(), 2);
}

#[tokio::test]
async fn test_seeded_counter_continues() {
    let t = start();
    let sequences = &t.system.sequences;
    let club_id = ClubId(1);

    sequences
        .seed(SequenceKey::Bag { club: club_id }, 41)
        .await
        .unwrap();
    assert_eq!(sequences.next_bag(club_id).await.unwrap(), 42);
    assert_eq!(
        sequences
            .current(SequenceKey::Bag { club: ClubId(2) })
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_seed_cannot_rewind_a_live_counter() {
    let t = start();
    let fc = club(&t.system, "FC").await;
    let user_id = customer(&t, "77011112233", "Aigerim").await;
    let first = drop_off(&t.system, user_id, fc, "A1").await;
    drop_off(&t.system, user_id, fc, "A2").await;

    let key = SequenceKey::Daily {
        club: fc,
        day: day(2026, 2, 16),
    };
    let result = t.system.sequences.seed(key, 0).await;
    assert!(matches!(
        result,
        Err(SequenceError::SeedBelowCurrent {
            current: 2,
            requested: 0,
            ..
        })
    ));

    let next = drop_off(&t.system, user_id, fc, "A3").await;
    assert_ne!(next.order_number, first.order_number);
    assert_eq!(next.order_number.to_string(), "20260216-FC-003");
}

#[tokio::test]
async fn test_seed_cannot_evict_the_cell_holder() {
    let t = start();
    let lockers = &t.system.lockers;
    let key = CellKey::new(ClubId(1), CellId::new("A1"));

    lockers.claim(key.clone(), OrderId(1)).await.unwrap();
    let result = lockers.seed(key.clone(), OrderId(2)).await;
    assert!(matches!(
        result,
        Err(LockerError::CellOccupied { holder: OrderId(1), .. })
    ));
    assert_eq!(lockers.occupant(key.clone()).await.unwrap(), Some(OrderId(1)));

    // Restoring the holder's own claim is fine
    lockers.seed(key.clone(), OrderId(1)).await.unwrap();
    lockers.seed(CellKey::new(ClubId(1), CellId::new("B2")), OrderId(3)).await.unwrap();
    assert_eq!(
        lockers
            .occupant(CellKey::new(ClubId(1), CellId::new("B2")))
            .await
            .unwrap(),
        Some(OrderId(3))
    );
}
