use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::domain::repository::Mailer as _;
use crate::error::RecoveryServiceError;
use crate::state::AppState;
use crate::usecase::reset::{
    RequestResetInput, RequestResetUseCase, VerifyResetInput, VerifyResetUseCase,
};

#[derive(Deserialize)]
pub struct RequestResetRequest {
    pub email: String,
}

#[derive(Deserialize)]
pub struct VerifyResetRequest {
    pub email: String,
    pub code: String,
}

#[derive(Serialize)]
pub struct ResetResponse {
    pub success: bool,
}

/// `POST /request-reset`. A malformed or missing body is never a 4xx: it
/// collapses to `{"success": false}` just like an empty email would.
pub async fn request_reset(
    State(state): State<AppState>,
    body: Result<Json<RequestResetRequest>, JsonRejection>,
) -> Result<Json<ResetResponse>, RecoveryServiceError> {
    let Ok(Json(body)) = body else {
        return Ok(Json(ResetResponse { success: false }));
    };
    let usecase = RequestResetUseCase {
        codes: state.recovery_code_repo(),
        mailer: state.mailer.clone(),
    };
    usecase
        .execute(RequestResetInput { email: body.email })
        .await?;
    Ok(Json(ResetResponse { success: true }))
}

/// `POST /verify-reset`. Same body convention as `request_reset`.
pub async fn verify_reset(
    State(state): State<AppState>,
    body: Result<Json<VerifyResetRequest>, JsonRejection>,
) -> Result<Json<ResetResponse>, RecoveryServiceError> {
    let Ok(Json(body)) = body else {
        return Ok(Json(ResetResponse { success: false }));
    };
    let usecase = VerifyResetUseCase {
        codes: state.recovery_code_repo(),
    };
    usecase
        .execute(VerifyResetInput {
            email: body.email,
            code: body.code,
        })
        .await?;
    Ok(Json(ResetResponse { success: true }))
}

// ── Diagnostics ───────────────────────────────────────────────────────────────

/// Where `GET /test-email` delivers. Development aid only.
const TEST_EMAIL_RECIPIENT: &str = "dev@monetix.app";

#[derive(Serialize)]
pub struct TestEmailResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `GET /test-email` — sends a fixed message and relays the raw provider
/// outcome. Unlike the reset endpoints this one does leak the error cause;
/// it exists to debug the Resend integration, not for clients.
pub async fn test_email(State(state): State<AppState>) -> (StatusCode, Json<TestEmailResponse>) {
    let sent = state
        .mailer
        .send(
            TEST_EMAIL_RECIPIENT,
            "Prueba Resend Monetix",
            "<h1>Resend funcionando correctamente</h1>",
        )
        .await;
    match sent {
        Ok(id) => (
            StatusCode::OK,
            Json(TestEmailResponse {
                success: true,
                result: Some(id),
                error: None,
            }),
        ),
        Err(e) => {
            // Relay the underlying cause, not the generic Display of the
            // error enum, so the diagnostic is actually diagnostic.
            let detail = match &e {
                RecoveryServiceError::Internal(inner) => inner.to_string(),
                other => other.to_string(),
            };
            tracing::error!(error = %detail, kind = e.kind(), "test email failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(TestEmailResponse {
                    success: false,
                    result: None,
                    error: Some(detail),
                }),
            )
        }
    }
}
