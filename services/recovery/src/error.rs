use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Recovery service error variants.
///
/// The wire shape is deliberately uniform: every failure serializes as
/// `{"success": false}` so callers cannot distinguish bad input from a
/// lookup miss. Only the status code separates expected outcomes (200)
/// from infrastructure failures (500).
#[derive(Debug, thiserror::Error)]
pub enum RecoveryServiceError {
    #[error("missing or empty input")]
    InvalidRequest,
    #[error("no matching recovery code")]
    CodeNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RecoveryServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::CodeNotFound => "CODE_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for RecoveryServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidRequest | Self::CodeNotFound => StatusCode::OK,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests, and InvalidRequest/CodeNotFound are expected outcomes.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = self.kind(), "internal error");
        }
        let body = serde_json::json!({ "success": false });
        (status, axum::Json(body)).into_response()
    }
}
