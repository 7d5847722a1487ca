use serde::Deserialize;

use hotel_core::config::Config;

/// Auth service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret for access tokens. Env var: `JWT_ACCESS_SECRET`.
    pub jwt_access_secret: String,
    /// HMAC secret for refresh tokens; must differ from the access secret.
    /// Env var: `JWT_REFRESH_SECRET`.
    pub jwt_refresh_secret: String,
    /// TCP port to listen on (default 3112). Env var: `AUTH_PORT`.
    #[serde(default = "default_auth_port")]
    pub auth_port: u16,
}

fn default_auth_port() -> u16 {
    3112
}

impl Config for AuthConfig {}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_ACCESS_SECRET and JWT_REFRESH_SECRET must be set")]
    EmptySecret,
    #[error("JWT_ACCESS_SECRET and JWT_REFRESH_SECRET must differ")]
    SharedSecret,
}

impl AuthConfig {
    /// Reject secret setups that would let one token kind pass as the other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_access_secret.is_empty() || self.jwt_refresh_secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        if self.jwt_access_secret == self.jwt_refresh_secret {
            return Err(ConfigError::SharedSecret);
        }
        Ok(())
    }
}
