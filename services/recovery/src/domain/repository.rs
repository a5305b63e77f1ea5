#![allow(async_fn_in_trait)]

use crate::domain::types::RecoveryCode;
use crate::error::RecoveryServiceError;

/// Repository for one-time recovery codes.
pub trait RecoveryCodeRepository: Send + Sync {
    /// Atomically delete every code stored for the record's email and insert
    /// the new one, so at most one live code exists per email.
    async fn replace(&self, record: &RecoveryCode) -> Result<(), RecoveryServiceError>;

    /// Atomically consume a live code: delete the row matching exact
    /// email + code (unexpired only) together with any leftover rows for the
    /// email. Returns `true` if a matching live code was consumed.
    async fn consume(&self, email: &str, code: &str) -> Result<bool, RecoveryServiceError>;
}

/// Port for the transactional email provider. The sender identity is fixed
/// by the implementation; callers supply recipient, subject, and HTML body.
pub trait Mailer: Send + Sync {
    /// Send one email. Returns the provider's message id.
    async fn send(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<String, RecoveryServiceError>;
}
