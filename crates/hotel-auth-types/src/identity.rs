//! Bearer-token identity extractor.

use std::fmt;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use uuid::Uuid;

use hotel_domain::user::UserRole;

use crate::token::{TokenError, validate_access_token};

/// HMAC secret used to verify access tokens. Router state must expose it via `FromRef`.
#[derive(Clone)]
pub struct AccessSecret(Arc<str>);

impl AccessSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessSecret(..)")
    }
}

/// Authenticated caller, taken from `Authorization: Bearer <access token>`.
///
/// Rejects with 401 when the header is absent or the token fails validation.
/// Role enforcement (403) is done by handlers after extraction.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub access_token_exp: i64,
}

impl Identity {
    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        roles.contains(&self.role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityRejection {
    #[error("authorization header missing")]
    MissingToken,
    #[error("token expired")]
    TokenExpired,
    #[error("invalid token")]
    InvalidToken,
}

impl IdentityRejection {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingToken => "MISSING_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidToken => "INVALID_TOKEN",
        }
    }
}

impl From<TokenError> for IdentityRejection {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Expired => Self::TokenExpired,
            _ => Self::InvalidToken,
        }
    }
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    AccessSecret: FromRef<S>,
{
    type Rejection = IdentityRejection;

    // Validation is synchronous; resolve it before the future so the returned
    // future borrows nothing from `parts` or `state`.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = AccessSecret::from_ref(state);
        let result = match parts.headers.typed_get::<Authorization<Bearer>>() {
            None => Err(IdentityRejection::MissingToken),
            Some(Authorization(bearer)) => validate_access_token(bearer.token(), secret.as_str())
                .map(|info| Identity {
                    user_id: info.user_id,
                    email: info.email,
                    role: info.role,
                    access_token_exp: info.access_token_exp,
                })
                .map_err(|e| {
                    tracing::debug!(error = %e, "access token rejected");
                    IdentityRejection::from(e)
                }),
        };
        async move { result }
    }
}
