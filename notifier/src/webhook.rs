use std::time::Duration;

use listener_core::NotifyError;
use reqwest::Client;
use tracing::{debug, error};

use crate::message::SlackMessage;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Posts payloads to the configured incoming webhook.
#[derive(Debug)]
pub struct WebhookClient {
    http_client: Client,
    webhook_url: String,
}

impl WebhookClient {
    pub fn new(webhook_url: String) -> Self {
        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            webhook_url,
        }
    }

    /// Sends one message. A failed notification fails the whole run, so a
    /// non-success response surfaces the status and body instead of being
    /// swallowed.
    pub async fn send(&self, message: &SlackMessage) -> Result<(), NotifyError> {
        let response = self
            .http_client
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!("Webhook accepted payload");
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable response body>".to_string());
        error!("Webhook rejected payload: status {}, body {}", status, body);
        Err(NotifyError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
