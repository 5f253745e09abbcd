use crate::model::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

const COUNTRY_CODE: char = '7';

/// A phone number in normalised digits-only international form (`77001234567`).
///
/// Normalisation drops every non-digit, rewrites the domestic trunk prefix `8` of an
/// 11-digit number to the country code, and prefixes bare 10-digit numbers with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        let normalised = match digits.len() {
            10 => format!("{COUNTRY_CODE}{digits}"),
            11 if digits.starts_with('8') => format!("{COUNTRY_CODE}{}", &digits[1..]),
            n if (11..=15).contains(&n) => digits,
            _ => return Err(ParseError::Phone(raw.to_string())),
        };
        Ok(Self(normalised))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_local_formats() {
        let expected = "77001234567";
        for raw in ["+7 (700) 123-45-67", "8 700 123 45 67", "7001234567", "77001234567"] {
            assert_eq!(Phone::parse(raw).unwrap().as_str(), expected, "input {raw}");
        }
    }

    #[test]
    fn rejects_short_numbers() {
        assert!(matches!(Phone::parse("12345"), Err(ParseError::Phone(_))));
        assert!(Phone::parse("").is_err());
    }

    #[test]
    fn displays_with_plus() {
        assert_eq!(Phone::parse("87001234567").unwrap().to_string(), "+77001234567");
    }
}
