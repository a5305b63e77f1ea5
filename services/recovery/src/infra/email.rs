use anyhow::Context as _;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::domain::repository::Mailer;
use crate::domain::types::EMAIL_FROM;
use crate::error::RecoveryServiceError;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Resend REST API response for a sent email.
#[derive(Deserialize)]
struct SendResponse {
    id: String,
}

/// Mailer backed by the Resend transactional email API.
/// One HTTP call per send, no retry.
#[derive(Clone)]
pub struct ResendMailer {
    http: Client,
    api_key: String,
}

impl ResendMailer {
    pub fn new(api_key: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
        }
    }
}

impl Mailer for ResendMailer {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<String, RecoveryServiceError> {
        let response = self
            .http
            .post(RESEND_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": EMAIL_FROM,
                "to": [to],
                "subject": subject,
                "html": html,
            }))
            .send()
            .await
            .context("send email via Resend")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Resend returned {status}: {body}").into());
        }

        let sent: SendResponse = response
            .json()
            .await
            .context("decode Resend response")?;
        Ok(sent.id)
    }
}
