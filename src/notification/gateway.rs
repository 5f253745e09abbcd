//! Outbound message delivery.

use crate::config::WhatsAppConfig;
use crate::model::Phone;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    /// The request never got a usable answer.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The provider answered and refused the message.
    #[error("Message rejected: {0}")]
    Rejected(String),
}

/// A channel able to deliver a rendered text message to a phone number.
#[async_trait]
pub trait NotificationGateway: Debug + Send + Sync {
    async fn send(&self, recipient: &Phone, message: &str) -> Result<(), GatewayError>;
}

/// WhatsApp delivery through the UltraMsg-style REST API
/// (`POST {api_url}/messages/chat` with a `token`, `to`, `body` form).
#[derive(Debug, Clone)]
pub struct WhatsAppGateway {
    client: reqwest::Client,
    config: WhatsAppConfig,
}

impl WhatsAppGateway {
    pub fn new(config: WhatsAppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl NotificationGateway for WhatsAppGateway {
    async fn send(&self, recipient: &Phone, message: &str) -> Result<(), GatewayError> {
        let url = format!("{}/messages/chat", self.config.api_url);
        let response = self
            .client
            .post(&url)
            .form(&[
                ("token", self.config.token.as_str()),
                ("to", recipient.as_str()),
                ("body", message),
            ])
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        let body = read_reply(status, &text)?;
        debug!(to = %recipient, response = %body, "WhatsApp message accepted");
        Ok(())
    }
}

/// Turns the provider's reply into its JSON body, or the reason the message was refused.
fn read_reply(status: StatusCode, text: &str) -> Result<serde_json::Value, GatewayError> {
    if !status.is_success() {
        return Err(GatewayError::Rejected(format!("{status}: {}", text.trim())));
    }
    let body: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| GatewayError::Transport(format!("unreadable reply: {e}")))?;
    if let Some(error) = body.get("error") {
        return Err(GatewayError::Rejected(error.to_string()));
    }
    Ok(body)
}

/// Writes messages to the log instead of sending them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogGateway;

#[async_trait]
impl NotificationGateway for LogGateway {
    async fn send(&self, recipient: &Phone, message: &str) -> Result<(), GatewayError> {
        info!(to = %recipient, message, "Notification (not sent, no gateway configured)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_error_page_keeps_the_status() {
        let err = read_reply(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>").unwrap_err();
        match err {
            GatewayError::Rejected(reason) => assert!(reason.starts_with("502")),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn provider_error_field_is_a_rejection() {
        let err = read_reply(StatusCode::OK, r#"{"error":"wrong token"}"#).unwrap_err();
        assert_eq!(err, GatewayError::Rejected("\"wrong token\"".into()));
    }

    #[test]
    fn garbled_success_reply_is_a_transport_error() {
        let err = read_reply(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[test]
    fn accepted_reply() {
        let body = read_reply(StatusCode::OK, r#"{"sent":"true","id":"42"}"#).unwrap();
        assert_eq!(body["id"], "42");
    }
}
