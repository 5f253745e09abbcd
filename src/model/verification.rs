use crate::model::Phone;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A one-time code proving control of a phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode {
    pub phone: Phone,
    pub code: String,
    pub issued_at: DateTime<Utc>,
    /// Failed checks so far.
    pub attempts: u32,
    /// Set once the code matched or ran out of attempts; the store then drops it.
    pub consumed: bool,
}

/// Payload for issuing a code. Issuing again for the same phone replaces the old code.
#[derive(Debug, Clone)]
pub struct VerificationIssue {
    pub phone: Phone,
    pub code: String,
    pub issued_at: DateTime<Utc>,
}

impl VerificationIssue {
    /// Draws a random numeric code of `length` digits (leading zeros allowed).
    pub fn random(phone: Phone, length: usize, issued_at: DateTime<Utc>) -> Self {
        let mut rng = rand::thread_rng();
        let code = (0..length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        Self {
            phone,
            code,
            issued_at,
        }
    }
}

/// Outcome of a check that the caller can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCheck {
    pub accepted: bool,
    pub remaining_attempts: u32,
}
