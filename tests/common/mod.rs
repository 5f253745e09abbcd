#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use laundry_locker::clock::FixedClock;
use laundry_locker::config::AppConfig;
use laundry_locker::lifecycle::LaundrySystem;
use laundry_locker::model::{
    CellId, ClubCode, ClubCreate, ClubId, OrderCreate, OrderReceipt, Phone, UserId,
};
use laundry_locker::notification::{GatewayError, NotificationGateway};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const ADMIN_PHONE: &str = "77000000001";

/// Keeps every message instead of sending it.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<(Phone, String)>>,
    failing: AtomicBool,
}

impl RecordingGateway {
    pub fn fail_sends(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<(Phone, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, phone: &Phone) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|(to, _)| to == phone)
            .map(|(_, text)| text)
            .collect()
    }

    /// Waits until `phone` received at least `count` messages. Deliveries are detached
    /// tasks, so tests poll for them.
    pub async fn wait_for(&self, phone: &Phone, count: usize) -> Vec<String> {
        for _ in 0..200 {
            let messages = self.sent_to(phone);
            if messages.len() >= count {
                return messages;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!(
            "expected {count} messages to {phone}, got {:?}",
            self.sent_to(phone)
        );
    }

    /// The digits at the end of the last message to `phone`.
    pub fn last_code(&self, phone: &Phone) -> String {
        let last = self.sent_to(phone).pop().expect("no message sent");
        last.chars()
            .rev()
            .take_while(char::is_ascii_digit)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect()
    }
}

#[async_trait]
impl NotificationGateway for RecordingGateway {
    async fn send(&self, recipient: &Phone, message: &str) -> Result<(), GatewayError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(GatewayError::Transport("connection refused".into()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((recipient.clone(), message.to_string()));
        Ok(())
    }
}

pub struct TestSystem {
    pub system: LaundrySystem,
    pub gateway: Arc<RecordingGateway>,
    pub clock: Arc<FixedClock>,
}

/// A system at 09:00 local time (UTC+5) on 2026-02-16.
pub fn start() -> TestSystem {
    let config = AppConfig {
        admin_phone: Some(admin_phone()),
        ..AppConfig::default()
    };
    let gateway = Arc::new(RecordingGateway::default());
    let clock = Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2026, 2, 16, 4, 0, 0).unwrap(),
    ));
    let system = LaundrySystem::new(config, gateway.clone(), clock.clone());
    TestSystem {
        system,
        gateway,
        clock,
    }
}

pub fn admin_phone() -> Phone {
    Phone::parse(ADMIN_PHONE).unwrap()
}

pub fn phone(raw: &str) -> Phone {
    Phone::parse(raw).unwrap()
}

pub async fn club(system: &LaundrySystem, code: &str) -> ClubId {
    system
        .create_club(ClubCreate {
            name: format!("Club {code}"),
            code: ClubCode::parse(code).unwrap(),
        })
        .await
        .expect("Failed to create club")
}

/// Registers a customer the way the app does: issue a code, read it off the phone,
/// submit it.
pub async fn customer(t: &TestSystem, raw_phone: &str, name: &str) -> UserId {
    let phone = phone(raw_phone);
    t.system
        .issue_verification_code(phone.clone())
        .await
        .expect("Failed to issue code");
    let code = t.gateway.last_code(&phone);
    t.system
        .register_user(phone, &code, name.to_string(), None)
        .await
        .expect("Failed to register user")
}

pub async fn drop_off(
    system: &LaundrySystem,
    user_id: UserId,
    club_id: ClubId,
    cell: &str,
) -> OrderReceipt {
    system
        .create_order(OrderCreate {
            user_id,
            club_id,
            cell: CellId::new(cell),
            comment: None,
        })
        .await
        .expect("Failed to create order")
}
