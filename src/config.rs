//! Runtime configuration, read from the environment (and `.env` when present).

use crate::model::Phone;
use chrono::{Duration, FixedOffset, Offset, Utc};
use dotenvy::dotenv;
use std::env;
use thiserror::Error;

const DEFAULT_OFFSET_HOURS: i32 = 5;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Credentials for the WhatsApp messaging gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct WhatsAppConfig {
    pub api_url: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationPolicy {
    pub max_attempts: u32,
    pub code_length: usize,
    /// `None` disables expiry; codes then live until used up.
    pub ttl: Option<Duration>,
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            code_length: 6,
            ttl: Some(Duration::seconds(600)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Mailbox capacity of every actor.
    pub mailbox_capacity: usize,
    /// Offset of the clubs' local time; order numbers use the local calendar day.
    pub local_offset: FixedOffset,
    pub verification: VerificationPolicy,
    /// `None` logs messages instead of sending them.
    pub whatsapp: Option<WhatsAppConfig>,
    /// Receives issue alerts.
    pub admin_phone: Option<Phone>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            local_offset: FixedOffset::east_opt(DEFAULT_OFFSET_HOURS * 3600)
                .unwrap_or_else(|| Utc.fix()),
            verification: VerificationPolicy::default(),
            whatsapp: None,
            admin_phone: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok(); // Load .env file if present

        let config = Self::from_lookup(|var| env::var(var).ok())?;
        tracing::info!(
            mailbox_capacity = config.mailbox_capacity,
            local_offset = %config.local_offset,
            whatsapp = config.whatsapp.is_some(),
            "Application configuration loaded"
        );
        Ok(config)
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let mailbox_capacity = parse_or(&get, "MAILBOX_CAPACITY", defaults.mailbox_capacity)?;
        if mailbox_capacity == 0 {
            return Err(invalid("MAILBOX_CAPACITY", "must be positive"));
        }

        let offset_hours: i32 = parse_or(&get, "LOCAL_UTC_OFFSET_HOURS", DEFAULT_OFFSET_HOURS)?;
        let local_offset = offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| invalid("LOCAL_UTC_OFFSET_HOURS", "out of range"))?;

        let max_attempts = parse_or(
            &get,
            "VERIFICATION_MAX_ATTEMPTS",
            defaults.verification.max_attempts,
        )?;
        if max_attempts == 0 {
            return Err(invalid("VERIFICATION_MAX_ATTEMPTS", "must be positive"));
        }
        let code_length = parse_or(
            &get,
            "VERIFICATION_CODE_LENGTH",
            defaults.verification.code_length,
        )?;
        if !(4..=9).contains(&code_length) {
            return Err(invalid("VERIFICATION_CODE_LENGTH", "must be between 4 and 9"));
        }
        let ttl_secs: i64 = parse_or(&get, "VERIFICATION_CODE_TTL_SECS", 600)?;
        let ttl = match ttl_secs {
            0 => None,
            n if n > 0 => Some(Duration::seconds(n)),
            _ => return Err(invalid("VERIFICATION_CODE_TTL_SECS", "must not be negative")),
        };

        let whatsapp = match (get("WHATSAPP_API_URL"), get("WHATSAPP_TOKEN")) {
            (Some(api_url), Some(token)) => Some(WhatsAppConfig {
                api_url: api_url.trim_end_matches('/').to_string(),
                token,
            }),
            (None, None) => None,
            _ => {
                return Err(invalid(
                    "WHATSAPP_API_URL",
                    "WHATSAPP_API_URL and WHATSAPP_TOKEN must be set together",
                ))
            }
        };

        let admin_phone = get("ADMIN_PHONE")
            .map(|raw| Phone::parse(&raw))
            .transpose()
            .map_err(|e| invalid("ADMIN_PHONE", e.to_string()))?;

        Ok(Self {
            mailbox_capacity,
            local_offset,
            verification: VerificationPolicy {
                max_attempts,
                code_length,
                ttl,
            },
            whatsapp,
            admin_phone,
        })
    }
}

fn invalid(var: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        var,
        reason: reason.into(),
    }
}

fn parse_or<T, G>(get: &G, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| invalid(var, e.to_string())),
        None => Ok(default),
    }
}
