use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One-time recovery code mailed to a user for the PIN-reset flow.
#[derive(Debug, Clone)]
pub struct RecoveryCode {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RecoveryCode {
    pub fn is_live(&self) -> bool {
        self.expires_at > Utc::now()
    }
}

/// Recovery code time-to-live in seconds (10 minutes).
pub const CODE_TTL_SECS: i64 = 600;

/// Inclusive range of generated codes. The floor guarantees six digits,
/// so no zero-padding is ever needed.
pub const CODE_MIN: u32 = 100_000;
pub const CODE_MAX: u32 = 999_999;

/// Fixed sender identity for all outbound mail.
pub const EMAIL_FROM: &str = "Monetix <onboarding@resend.dev>";

/// Fixed subject line for recovery emails.
pub const RESET_EMAIL_SUBJECT: &str = "Recuperación de PIN - Monetix";
