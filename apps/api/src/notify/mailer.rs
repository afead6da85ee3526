//! Email delivery. `AppState` holds an `Arc<dyn Mailer>` chosen at startup.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use aws_sdk_sesv2::Client as SesClient;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Email delivery is not configured")]
    NotConfigured,

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("SES send failed: {0}")]
    Send(String),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError>;
}

/// Used when no sender address is configured. Every send reports `NotConfigured`.
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, _to: &str, _subject: &str, _html: &str) -> Result<(), MailError> {
        Err(MailError::NotConfigured)
    }
}

/// Amazon SES v2 delivery. Credentials come from the default AWS provider chain.
pub struct SesMailer {
    client: SesClient,
    from: String,
}

impl SesMailer {
    pub async fn new(region: &str, from: String) -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Self {
            client: SesClient::new(&aws_config),
            from,
        }
    }
}

#[async_trait]
impl Mailer for SesMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError> {
        let destination = Destination::builder().to_addresses(to).build();

        let subject_content = Content::builder()
            .data(subject)
            .charset("UTF-8")
            .build()
            .map_err(|e| MailError::Build(format!("subject: {e}")))?;

        let body_content = Content::builder()
            .data(html)
            .charset("UTF-8")
            .build()
            .map_err(|e| MailError::Build(format!("body: {e}")))?;

        let message = Message::builder()
            .subject(subject_content)
            .body(Body::builder().html(body_content).build())
            .build();

        let result = self
            .client
            .send_email()
            .from_email_address(&self.from)
            .destination(destination)
            .content(EmailContent::builder().simple(message).build())
            .send()
            .await
            .map_err(|e| MailError::Send(e.to_string()))?;

        info!(
            "Email sent to {to} via SES (message_id={:?})",
            result.message_id()
        );
        Ok(())
    }
}

/// Records messages instead of sending them.
#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingMailer {
        pub sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, to: &str, subject: &str, _html: &str) -> Result<(), MailError> {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string()));
            Ok(())
        }
    }
}
