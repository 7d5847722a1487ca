//! JWT claim layout and verification for access and refresh tokens.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotel_domain::user::UserRole;

/// Access-token lifetime in seconds (15 minutes).
pub const ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;

/// Refresh-token lifetime in seconds (7 days).
pub const REFRESH_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Discriminates the two token kinds inside the payload (`"type"` claim).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Errors returned by [`decode_token`] and [`validate_access_token`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("malformed token")]
    Malformed,
    #[error("unexpected token type")]
    UnexpectedType,
}

/// JWT payload shared by token creation (auth service) and validation (every service).
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `user_id` | `userId` | user UUID |
/// | `email` | `email` | user email at issue time |
/// | `role` | `role` | present on access tokens only |
/// | `token_type` | `type` | `"access"` or `"refresh"` |
/// | `jti` | `jti` | random id, keeps same-second tokens distinct |
/// | `iat` / `exp` | `iat` / `exp` | seconds since UNIX epoch |
///
/// [`Serialize`] requires the **`USE_ONLY_IN_AUTH_SERVICE`** cargo feature: only the
/// auth service issues tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test), derive(Serialize))]
#[serde(rename_all = "camelCase")]
pub struct JwtClaims {
    pub user_id: Uuid,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub jti: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// User identity extracted from a validated access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub access_token_exp: i64,
}

/// Decode and verify a token signed with `secret`, requiring `expected` as its type.
///
/// HS256, `exp` required and checked with zero leeway: issuer and verifier share a clock
/// source in this deployment.
pub fn decode_token(
    token: &str,
    secret: &str,
    expected: TokenType,
) -> Result<JwtClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    if data.claims.token_type != expected {
        return Err(TokenError::UnexpectedType);
    }
    Ok(data.claims)
}

/// Validate an access token, returning the caller's identity.
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenInfo, TokenError> {
    let claims = decode_token(token, secret, TokenType::Access)?;
    let role = claims.role.ok_or(TokenError::Malformed)?;
    Ok(TokenInfo {
        user_id: claims.user_id,
        email: claims.email,
        role,
        access_token_exp: claims.exp,
    })
}
