use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use uuid::Uuid;

use monetix_recovery::domain::repository::{Mailer, RecoveryCodeRepository};
use monetix_recovery::domain::types::RecoveryCode;
use monetix_recovery::error::RecoveryServiceError;

// ── MockRecoveryCodeRepo ─────────────────────────────────────────────────────

pub struct MockRecoveryCodeRepo {
    pub codes: Arc<Mutex<Vec<RecoveryCode>>>,
    /// When set, every call fails like a broken database connection.
    pub fail: bool,
}

impl MockRecoveryCodeRepo {
    pub fn new(codes: Vec<RecoveryCode>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
            fail: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn failing() -> Self {
        Self {
            codes: Arc::new(Mutex::new(vec![])),
            fail: true,
        }
    }

    /// Returns a shared handle to the stored codes for post-execution inspection.
    pub fn codes_handle(&self) -> Arc<Mutex<Vec<RecoveryCode>>> {
        Arc::clone(&self.codes)
    }
}

impl RecoveryCodeRepository for MockRecoveryCodeRepo {
    async fn replace(&self, record: &RecoveryCode) -> Result<(), RecoveryServiceError> {
        if self.fail {
            return Err(anyhow::anyhow!("database unavailable").into());
        }
        let mut codes = self.codes.lock().unwrap();
        codes.retain(|c| c.email != record.email);
        codes.push(record.clone());
        Ok(())
    }

    async fn consume(&self, email: &str, code: &str) -> Result<bool, RecoveryServiceError> {
        if self.fail {
            return Err(anyhow::anyhow!("database unavailable").into());
        }
        let mut codes = self.codes.lock().unwrap();
        let matched = codes
            .iter()
            .any(|c| c.email == email && c.code == code && c.is_live());
        if matched {
            codes.retain(|c| c.email != email);
        }
        Ok(matched)
    }
}

// ── MockMailer ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<SentEmail>>>,
    /// When set, every send fails like an unreachable provider.
    pub fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: true,
        }
    }

    pub fn sent_handle(&self) -> Arc<Mutex<Vec<SentEmail>>> {
        Arc::clone(&self.sent)
    }
}

impl Mailer for MockMailer {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<String, RecoveryServiceError> {
        if self.fail {
            return Err(anyhow::anyhow!("email provider unavailable").into());
        }
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_owned(),
            subject: subject.to_owned(),
            html: html.to_owned(),
        });
        Ok("mock-message-id".to_owned())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn live_code(email: &str, code: &str) -> RecoveryCode {
    RecoveryCode {
        id: Uuid::new_v4(),
        email: email.to_owned(),
        code: code.to_owned(),
        expires_at: Utc::now() + Duration::seconds(600),
        created_at: Utc::now(),
    }
}

pub fn expired_code(email: &str, code: &str) -> RecoveryCode {
    RecoveryCode {
        expires_at: Utc::now() - Duration::seconds(1),
        ..live_code(email, code)
    }
}
