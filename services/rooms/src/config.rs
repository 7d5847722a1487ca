use serde::Deserialize;

use hotel_core::config::Config;

/// Rooms service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct RoomsConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret shared with the auth service to verify bearer tokens.
    /// Env var: `JWT_ACCESS_SECRET`.
    pub jwt_access_secret: String,
    /// TCP port for the HTTP server (default 3114). Env var: `ROOMS_PORT`.
    #[serde(default = "default_rooms_port")]
    pub rooms_port: u16,
}

fn default_rooms_port() -> u16 {
    3114
}

impl Config for RoomsConfig {}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("JWT_ACCESS_SECRET must be set")]
pub struct EmptySecret;

impl RoomsConfig {
    pub fn validate(&self) -> Result<(), EmptySecret> {
        if self.jwt_access_secret.is_empty() {
            return Err(EmptySecret);
        }
        Ok(())
    }
}
