//! Email delivery through the Mailtrap send API.
//!
//! One HTTP POST per notification; no batching. The API token is allowed to
//! be absent at startup so the rest of the service still runs — sending then
//! fails fast with a configuration error instead of an opaque 401.

use async_trait::async_trait;
use furbit_core::config::MailerConfig;
use tracing::{debug, warn};

use crate::{channel::NotificationChannel, error::ChannelError, types::Notification};

/// Mailtrap-backed [`NotificationChannel`] implementation.
pub struct EmailChannel {
    client: reqwest::Client,
    api_url: String,
    api_token: Option<String>,
    from_email: String,
    from_name: String,
}

impl EmailChannel {
    pub fn from_config(cfg: &MailerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: cfg.api_url.clone(),
            api_token: cfg.api_token.clone(),
            from_email: cfg.from_email.clone(),
            from_name: cfg.from_name.clone(),
        }
    }
}

#[async_trait]
impl NotificationChannel for EmailChannel {
    fn name(&self) -> &str {
        "email"
    }

    async fn send(&self, notification: &Notification) -> Result<(), ChannelError> {
        let token = self.api_token.as_deref().ok_or_else(|| {
            ChannelError::ConfigError("mailer.api_token is not configured".to_string())
        })?;

        let body = build_payload(notification, &self.from_email, &self.from_name);
        debug!(to = %notification.to_address, subject = %notification.subject, "sending email");

        let resp = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {token}"))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let text = resp.text().await.unwrap_or_default();
            warn!(status, body = %text, "mail API rejected the message");
            return Err(ChannelError::Api { status, body: text });
        }

        debug!(to = %notification.to_address, "email accepted");
        Ok(())
    }
}

/// Build the Mailtrap send-API request body.
///
/// Kept as a free function so the wire shape is testable without a server.
fn build_payload(
    notification: &Notification,
    from_email: &str,
    from_name: &str,
) -> serde_json::Value {
    let to = if notification.to_name.is_empty() {
        serde_json::json!({ "email": notification.to_address })
    } else {
        serde_json::json!({
            "email": notification.to_address,
            "name": notification.to_name,
        })
    };
    serde_json::json!({
        "from": {
            "email": from_email,
            "name": from_name,
        },
        "to": [to],
        "subject": notification.subject,
        "text": notification.body,
        "category": "Furbit Notification",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification() -> Notification {
        Notification {
            to_address: "dana@example.com".to_string(),
            to_name: "Dana".to_string(),
            subject: "subject".to_string(),
            body: "body".to_string(),
        }
    }

    #[test]
    fn payload_matches_mail_api_shape() {
        let payload = build_payload(&notification(), "hello@furbit.co", "Furbit Pet Passport");
        assert_eq!(payload["from"]["email"], "hello@furbit.co");
        assert_eq!(payload["from"]["name"], "Furbit Pet Passport");
        assert_eq!(payload["to"][0]["email"], "dana@example.com");
        assert_eq!(payload["to"][0]["name"], "Dana");
        assert_eq!(payload["subject"], "subject");
        assert_eq!(payload["text"], "body");
        assert_eq!(payload["category"], "Furbit Notification");
    }

    #[test]
    fn payload_omits_empty_recipient_name() {
        let note = Notification::connectivity_test("dana@example.com");
        let payload = build_payload(&note, "hello@furbit.co", "Furbit Pet Passport");
        assert!(payload["to"][0].get("name").is_none());
        assert_eq!(payload["subject"], "Test Email from Furbit 🐾");
    }

    #[tokio::test]
    async fn missing_token_fails_before_any_http() {
        let channel = EmailChannel {
            client: reqwest::Client::new(),
            api_url: "http://localhost:1/api/send".to_string(),
            api_token: None,
            from_email: "hello@furbit.co".to_string(),
            from_name: "Furbit Pet Passport".to_string(),
        };
        let err = channel.send(&notification()).await.unwrap_err();
        assert!(matches!(err, ChannelError::ConfigError(_)));
    }
}
