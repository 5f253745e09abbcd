//! Human-facing identifiers: club codes, order numbers, pickup codes and bag labels.

use crate::model::ParseError;
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Short club code embedded in order numbers and bag labels (`FC`).
///
/// 2 to 8 ASCII alphanumerics, stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClubCode(String);

impl ClubCode {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let code = raw.trim();
        let valid = (2..=8).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphanumeric());
        if !valid {
            return Err(ParseError::ClubCode(raw.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ClubCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClubCode {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClubCode> for String {
    fn from(code: ClubCode) -> Self {
        code.0
    }
}

impl Display for ClubCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `YYYYMMDD-CLUBCODE-SEQ`, with SEQ zero-padded to three digits.
///
/// Assigned once when the order is created and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderNumber {
    day: NaiveDate,
    club: ClubCode,
    seq: u32,
}

impl OrderNumber {
    pub fn new(day: NaiveDate, club: ClubCode, seq: u32) -> Self {
        Self { day, club, seq }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn club(&self) -> &ClubCode {
        &self.club
    }

    pub fn seq(&self) -> u32 {
        self.seq
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{:03}", self.day.format("%Y%m%d"), self.club, self.seq)
    }
}

impl FromStr for OrderNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::OrderNumber(s.to_string());
        let mut parts = s.split('-');
        let (Some(day), Some(club), Some(seq), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if day.len() != 8 || seq.len() < 3 || !seq.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let day = NaiveDate::parse_from_str(day, "%Y%m%d").map_err(|_| invalid())?;
        let club = ClubCode::parse(club).map_err(|_| invalid())?;
        let seq: u32 = seq.parse().map_err(|_| invalid())?;
        if seq == 0 {
            return Err(invalid());
        }
        Ok(Self { day, club, seq })
    }
}

impl TryFrom<String> for OrderNumber {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OrderNumber> for String {
    fn from(number: OrderNumber) -> Self {
        number.to_string()
    }
}

/// Four decimal digits handed to the customer to open the pickup cell.
///
/// Not unique: lookups narrow by status (and optionally club), which keeps the
/// collision domain down to the currently outstanding pickups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PickupCode(String);

impl PickupCode {
    pub const LEN: usize = 4;

    pub fn generate() -> Self {
        let n: u32 = rand::thread_rng().gen_range(0..10_000);
        Self(format!("{n:04}"))
    }

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let code = raw.trim();
        if code.len() != Self::LEN || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseError::PickupCode(raw.to_string()));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PickupCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PickupCode {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PickupCode> for String {
    fn from(code: PickupCode) -> Self {
        code.0
    }
}

impl Display for PickupCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tracking label on the laundry bag. Couriers and laundry staff may relabel it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BagNumber(pub String);

impl BagNumber {
    /// Label written at drop-off: `CLUBCODE-NNNN`.
    pub fn initial(club: &ClubCode, seq: u32) -> Self {
        Self(format!("{club}-{seq:04}"))
    }
}

impl Display for BagNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fc() -> ClubCode {
        ClubCode::parse("fc").unwrap()
    }

    #[test]
    fn order_number_format() {
        let day = NaiveDate::from_ymd_opt(2026, 2, 16).unwrap();
        let number = OrderNumber::new(day, fc(), 1);
        assert_eq!(number.to_string(), "20260216-FC-001");
        assert_eq!(OrderNumber::new(day, fc(), 1234).to_string(), "20260216-FC-1234");
    }

    #[test]
    fn order_number_parses_its_own_output() {
        let parsed: OrderNumber = "20260216-FC-042".parse().unwrap();
        assert_eq!(parsed.seq(), 42);
        assert_eq!(parsed.club().as_str(), "FC");
        assert_eq!(parsed.day(), NaiveDate::from_ymd_opt(2026, 2, 16).unwrap());
    }

    #[test]
    fn order_number_rejects_malformed_input() {
        for raw in [
            "",
            "20260216-FC",
            "20260216-FC-1",
            "20260230-FC-001",
            "2026021-FC-001",
            "20260216-F-001",
            "20260216-FC-000",
            "20260216-FC-00a",
            "20260216-FC-001-9",
        ] {
            assert!(raw.parse::<OrderNumber>().is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn club_code_is_upper_cased_and_bounded() {
        assert_eq!(fc().as_str(), "FC");
        assert!(ClubCode::parse("A").is_err());
        assert!(ClubCode::parse("TOOLONGCODE").is_err());
        assert!(ClubCode::parse("F-C").is_err());
    }

    #[test]
    fn generated_pickup_codes_are_four_digits() {
        for _ in 0..200 {
            let code = PickupCode::generate();
            assert_eq!(code.as_str().len(), 4);
            assert!(PickupCode::parse(code.as_str()).is_ok());
        }
        assert!(PickupCode::parse("48a1").is_err());
        assert!(PickupCode::parse("482").is_err());
    }

    #[test]
    fn initial_bag_label() {
        assert_eq!(BagNumber::initial(&fc(), 7).to_string(), "FC-0007");
    }
}
