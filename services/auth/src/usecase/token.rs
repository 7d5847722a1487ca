use anyhow::Context as _;
use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use uuid::Uuid;

use hotel_auth_types::token::{
    ACCESS_TOKEN_TTL_SECS, JwtClaims, REFRESH_TOKEN_TTL_SECS, TokenError, TokenType, decode_token,
};
use hotel_domain::user::UserRole;

use crate::error::AuthServiceError;

/// Access/refresh pair handed to clients. `expires_in` is the access-token lifetime in seconds.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

/// A signed refresh token plus the expiry baked into its `exp` claim.
#[derive(Debug, Clone)]
pub struct IssuedRefresh {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies tokens. Access and refresh tokens use separate secrets.
#[derive(Clone)]
pub struct TokenIssuer {
    pub access_secret: String,
    pub refresh_secret: String,
}

impl TokenIssuer {
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
        }
    }

    pub fn issue_access(
        &self,
        user_id: Uuid,
        email: &str,
        role: UserRole,
    ) -> Result<String, AuthServiceError> {
        let claims = claims(user_id, email, Some(role), TokenType::Access, ACCESS_TOKEN_TTL_SECS);
        sign(&claims, &self.access_secret)
    }

    pub fn issue_refresh(
        &self,
        user_id: Uuid,
        email: &str,
    ) -> Result<IssuedRefresh, AuthServiceError> {
        let claims = claims(user_id, email, None, TokenType::Refresh, REFRESH_TOKEN_TTL_SECS);
        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .context("refresh token exp out of range")?;
        let token = sign(&claims, &self.refresh_secret)?;
        Ok(IssuedRefresh { token, expires_at })
    }

    /// Issue both tokens. The refresh expiry is returned separately for storage.
    pub fn issue_pair(
        &self,
        user_id: Uuid,
        email: &str,
        role: UserRole,
    ) -> Result<(TokenPair, DateTime<Utc>), AuthServiceError> {
        let access_token = self.issue_access(user_id, email, role)?;
        let refresh = self.issue_refresh(user_id, email)?;
        let pair = TokenPair {
            access_token,
            refresh_token: refresh.token,
            expires_in: ACCESS_TOKEN_TTL_SECS,
        };
        Ok((pair, refresh.expires_at))
    }

    /// Verify a refresh token's signature, type and expiry.
    pub fn verify_refresh(&self, token: &str) -> Result<JwtClaims, AuthServiceError> {
        decode_token(token, &self.refresh_secret, TokenType::Refresh).map_err(|e| match e {
            TokenError::Expired => AuthServiceError::TokenExpired,
            _ => AuthServiceError::InvalidToken,
        })
    }

    /// Verify an access token's signature, type and expiry.
    pub fn verify_access(&self, token: &str) -> Result<JwtClaims, AuthServiceError> {
        decode_token(token, &self.access_secret, TokenType::Access).map_err(|e| match e {
            TokenError::Expired => AuthServiceError::TokenExpired,
            _ => AuthServiceError::InvalidToken,
        })
    }
}

fn claims(
    user_id: Uuid,
    email: &str,
    role: Option<UserRole>,
    token_type: TokenType,
    ttl_secs: i64,
) -> JwtClaims {
    let iat = Utc::now().timestamp();
    JwtClaims {
        user_id,
        email: email.to_owned(),
        role,
        token_type,
        jti: Uuid::new_v4(),
        iat,
        exp: iat + ttl_secs,
    }
}

fn sign(claims: &JwtClaims, secret: &str) -> Result<String, AuthServiceError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthServiceError::Internal(e.into()))
}
