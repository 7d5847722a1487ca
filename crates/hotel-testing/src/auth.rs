//! Bearer-token helpers for router tests.
//!
//! Services authenticate callers from a signed access token. Tests mint one here
//! with the same claim layout as the auth service, so no running auth service is needed.

use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use uuid::Uuid;

use hotel_auth_types::token::ACCESS_TOKEN_TTL_SECS;
use hotel_domain::user::UserRole;

/// Shared access secret for tests that build router state.
pub const TEST_ACCESS_SECRET: &str = "test-access-secret-for-tests-only";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccessClaims<'a> {
    user_id: Uuid,
    email: &'a str,
    role: UserRole,
    #[serde(rename = "type")]
    token_type: &'static str,
    jti: Uuid,
    iat: i64,
    exp: i64,
}

/// Configurable caller identity for test requests.
pub struct MockAuth {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl MockAuth {
    pub fn new(role: UserRole) -> Self {
        Self {
            user_id: Uuid::now_v7(),
            email: format!("{}@hotel.test", role.as_str()),
            role,
        }
    }

    /// Signed access token valid for the normal access-token lifetime.
    pub fn access_token(&self, secret: &str) -> String {
        self.access_token_expiring_in(secret, ACCESS_TOKEN_TTL_SECS)
    }

    /// Signed access token whose `exp` is `secs` from now (negative for already expired).
    pub fn access_token_expiring_in(&self, secret: &str, secs: i64) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = AccessClaims {
            user_id: self.user_id,
            email: &self.email,
            role: self.role,
            token_type: "access",
            jti: Uuid::new_v4(),
            iat: now,
            exp: now + secs,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("HS256 encoding with an in-memory key cannot fail")
    }

    /// `Authorization: Bearer …` header map.
    pub fn headers(&self, secret: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        let value = format!("Bearer {}", self.access_token(secret));
        map.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&value).expect("JWT is valid header text"),
        );
        map
    }
}
