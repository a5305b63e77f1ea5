use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::health::{healthz, readyz};
use crate::handlers::recovery::{request_reset, test_email, verify_reset};
use crate::middleware::request_id_layer;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Recovery flow
        .route("/request-reset", post(request_reset))
        .route("/verify-reset", post(verify_reset))
        // Diagnostics
        .route("/test-email", get(test_email))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
