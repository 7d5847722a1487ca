use chrono::Utc;
use tracing::{debug, info};

use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::domain::types::RefreshTokenRecord;
use crate::error::AuthServiceError;
use crate::usecase::token::{TokenIssuer, TokenPair};

// ── Refresh ──────────────────────────────────────────────────────────────────

pub struct RefreshUseCase<U: UserRepository, R: RefreshTokenRepository> {
    pub users: U,
    pub refresh_tokens: R,
    pub issuer: TokenIssuer,
}

impl<U: UserRepository, R: RefreshTokenRepository> RefreshUseCase<U, R> {
    /// Exchange a refresh token for a new pair. The presented token is consumed.
    pub async fn execute(&self, refresh_token: &str) -> Result<TokenPair, AuthServiceError> {
        if refresh_token.is_empty() {
            return Err(AuthServiceError::MissingData);
        }
        let claims = self.issuer.verify_refresh(refresh_token)?;

        let record = self
            .refresh_tokens
            .find_active(refresh_token)
            .await?
            .filter(|r| !r.is_expired(Utc::now()))
            .ok_or(AuthServiceError::InvalidOrExpiredToken)?;

        if record.user_id != claims.user_id {
            return Err(AuthServiceError::InvalidToken);
        }

        let user = self
            .users
            .find_by_id(record.user_id)
            .await?
            .filter(|u| u.is_active)
            .ok_or(AuthServiceError::UserNotFound)?;

        let (tokens, expires_at) = self.issuer.issue_pair(user.id, &user.email, user.role)?;
        let replacement = RefreshTokenRecord::new(user.id, tokens.refresh_token.clone(), expires_at);

        if !self.refresh_tokens.rotate(record.id, &replacement).await? {
            debug!(token_id = %record.id, "refresh token already consumed");
            return Err(AuthServiceError::InvalidOrExpiredToken);
        }

        Ok(tokens)
    }
}

// ── Logout ───────────────────────────────────────────────────────────────────

pub struct LogoutUseCase<R: RefreshTokenRepository> {
    pub refresh_tokens: R,
}

impl<R: RefreshTokenRepository> LogoutUseCase<R> {
    /// Revoke the token. Unknown, expired or already revoked tokens succeed too.
    pub async fn execute(&self, refresh_token: &str) -> Result<(), AuthServiceError> {
        if refresh_token.is_empty() {
            return Err(AuthServiceError::MissingData);
        }
        self.refresh_tokens.revoke(refresh_token).await?;
        info!("refresh token revoked");
        Ok(())
    }
}
