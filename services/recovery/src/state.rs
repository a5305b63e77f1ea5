use sea_orm::DatabaseConnection;

use crate::infra::db::DbRecoveryCodeRepository;
use crate::infra::email::ResendMailer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub mailer: ResendMailer,
}

impl AppState {
    pub fn recovery_code_repo(&self) -> DbRecoveryCodeRepository {
        DbRecoveryCodeRepository {
            db: self.db.clone(),
        }
    }
}
