use chrono::{Duration, Utc};
use rand::RngExt;
use uuid::Uuid;

use crate::domain::repository::{Mailer, RecoveryCodeRepository};
use crate::domain::types::{CODE_MAX, CODE_MIN, CODE_TTL_SECS, RESET_EMAIL_SUBJECT, RecoveryCode};
use crate::error::RecoveryServiceError;

/// Uniform 6-digit code. `CODE_MIN` keeps the first digit nonzero, so the
/// decimal rendering is always exactly six characters.
fn generate_code() -> String {
    let mut rng = rand::rng();
    rng.random_range(CODE_MIN..=CODE_MAX).to_string()
}

/// Emails are matched exactly in storage, so both writes and lookups go
/// through the same normalization.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn reset_email_html(code: &str) -> String {
    format!(
        "<h2>Recuperación de PIN</h2>\
         <p>Tu código de recuperación es:</p>\
         <h1>{code}</h1>\
         <p>Este código vence en 10 minutos.</p>"
    )
}

// ── RequestReset ──────────────────────────────────────────────────────────────

pub struct RequestResetInput {
    pub email: String,
}

pub struct RequestResetUseCase<R, M>
where
    R: RecoveryCodeRepository,
    M: Mailer,
{
    pub codes: R,
    pub mailer: M,
}

impl<R, M> RequestResetUseCase<R, M>
where
    R: RecoveryCodeRepository,
    M: Mailer,
{
    pub async fn execute(&self, input: RequestResetInput) -> Result<(), RecoveryServiceError> {
        let email = normalize_email(&input.email);
        if email.is_empty() {
            return Err(RecoveryServiceError::InvalidRequest);
        }

        let now = Utc::now();
        let record = RecoveryCode {
            id: Uuid::new_v4(),
            email: email.clone(),
            code: generate_code(),
            expires_at: now + Duration::seconds(CODE_TTL_SECS),
            created_at: now,
        };

        // Replace is atomic: prior codes for this email die in the same
        // transaction that stores the new one.
        self.codes.replace(&record).await?;

        // No retry. A failed send leaves an orphaned record that simply
        // expires; the caller sees the same generic failure either way.
        self.mailer
            .send(&email, RESET_EMAIL_SUBJECT, &reset_email_html(&record.code))
            .await?;

        Ok(())
    }
}

// ── VerifyReset ───────────────────────────────────────────────────────────────

pub struct VerifyResetInput {
    pub email: String,
    pub code: String,
}

pub struct VerifyResetUseCase<R>
where
    R: RecoveryCodeRepository,
{
    pub codes: R,
}

impl<R> VerifyResetUseCase<R>
where
    R: RecoveryCodeRepository,
{
    pub async fn execute(&self, input: VerifyResetInput) -> Result<(), RecoveryServiceError> {
        let email = normalize_email(&input.email);
        let code = input.code.trim();
        if email.is_empty() || code.is_empty() {
            return Err(RecoveryServiceError::InvalidRequest);
        }

        // Consume deletes the matching row and any leftovers for the email
        // in one transaction, so a code verifies at most once.
        if self.codes.consume(&email, code).await? {
            Ok(())
        } else {
            Err(RecoveryServiceError::CodeNotFound)
        }
    }
}
