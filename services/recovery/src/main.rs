use sea_orm::Database;
use tracing::info;

use monetix_recovery::config::RecoveryConfig;
use monetix_recovery::infra::email::ResendMailer;
use monetix_recovery::router::build_router;
use monetix_recovery::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = RecoveryConfig::from_env();

    // Fail fast: without a database there is no degraded mode to run in.
    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        mailer: ResendMailer::new(config.resend_api_key),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("recovery service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
