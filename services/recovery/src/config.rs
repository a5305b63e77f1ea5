/// Recovery service configuration loaded from environment variables.
#[derive(Debug)]
pub struct RecoveryConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Resend API key used for outbound recovery emails.
    pub resend_api_key: String,
    /// TCP port to listen on (default 3000). Env var: `PORT`.
    pub port: u16,
}

impl RecoveryConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            resend_api_key: std::env::var("RESEND_API_KEY").expect("RESEND_API_KEY"),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}
