use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    TransactionTrait,
};

use monetix_recovery_schema::recovery_codes;

use crate::domain::repository::RecoveryCodeRepository;
use crate::domain::types::RecoveryCode;
use crate::error::RecoveryServiceError;

/// Postgres-backed recovery code store.
///
/// The original contract is a TTL store: expired rows vanish on their own.
/// Postgres has no row TTL, so liveness is an `expires_at > now` filter on
/// every match and stale rows are swept by the next replace/consume for the
/// same email.
#[derive(Clone)]
pub struct DbRecoveryCodeRepository {
    pub db: DatabaseConnection,
}

impl RecoveryCodeRepository for DbRecoveryCodeRepository {
    async fn replace(&self, record: &RecoveryCode) -> Result<(), RecoveryServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let record = record.clone();
                Box::pin(async move {
                    recovery_codes::Entity::delete_many()
                        .filter(recovery_codes::Column::Email.eq(&record.email))
                        .exec(txn)
                        .await?;
                    recovery_codes::ActiveModel {
                        id: Set(record.id),
                        email: Set(record.email.clone()),
                        code: Set(record.code.clone()),
                        expires_at: Set(record.expires_at),
                        created_at: Set(record.created_at),
                    }
                    .insert(txn)
                    .await?;
                    Ok(())
                })
            })
            .await
            .context("replace recovery code")?;
        Ok(())
    }

    async fn consume(&self, email: &str, code: &str) -> Result<bool, RecoveryServiceError> {
        let email = email.to_owned();
        let code = code.to_owned();
        let consumed = self
            .db
            .transaction::<_, bool, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    let now = Utc::now();
                    let matched = recovery_codes::Entity::delete_many()
                        .filter(recovery_codes::Column::Email.eq(&email))
                        .filter(recovery_codes::Column::Code.eq(&code))
                        .filter(recovery_codes::Column::ExpiresAt.gt(now))
                        .exec(txn)
                        .await?;
                    if matched.rows_affected == 0 {
                        return Ok(false);
                    }
                    // Sweep any leftover rows for the email, expired ones included.
                    recovery_codes::Entity::delete_many()
                        .filter(recovery_codes::Column::Email.eq(&email))
                        .exec(txn)
                        .await?;
                    Ok(true)
                })
            })
            .await
            .context("consume recovery code")?;
        Ok(consumed)
    }
}
