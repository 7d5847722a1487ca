use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use hotel_domain::user::UserRole;

use crate::error::AuthServiceError;

/// Full account record, including the password hash. Never serialized.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub email_verified: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account data safe to return to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub email_verified: bool,
    #[serde(serialize_with = "hotel_core::serde::option_to_rfc3339_ms")]
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(serialize_with = "hotel_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            phone: u.phone,
            role: u.role,
            is_active: u.is_active,
            email_verified: u.email_verified,
            last_login_at: u.last_login_at,
            created_at: u.created_at,
        }
    }
}

/// Data needed to insert a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

/// Stored refresh token row.
#[derive(Debug, Clone)]
pub struct RefreshTokenRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub is_revoked: bool,
    pub created_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    pub fn new(user_id: Uuid, token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            token,
            expires_at,
            is_revoked: false,
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

// ── Validation ───────────────────────────────────────────────────────────────

pub const MAX_EMAIL_LEN: usize = 255;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_PHONE_LEN: usize = 20;

/// Trim and lowercase an email, then check its shape.
pub fn normalize_email(raw: &str) -> Result<String, AuthServiceError> {
    let email = raw.trim().to_lowercase();
    if email.len() > MAX_EMAIL_LEN {
        return Err(AuthServiceError::InvalidEmail);
    }
    let (local, domain) = email
        .split_once('@')
        .ok_or(AuthServiceError::InvalidEmail)?;
    let domain_ok = domain
        .split('.')
        .all(|label| !label.is_empty())
        && domain.contains('.');
    if local.is_empty() || !domain_ok || domain.contains('@') || email.contains(char::is_whitespace)
    {
        return Err(AuthServiceError::InvalidEmail);
    }
    Ok(email)
}

pub fn validate_password(password: &str) -> Result<(), AuthServiceError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LEN;
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if long_enough && has_lower && has_upper && has_digit {
        Ok(())
    } else {
        Err(AuthServiceError::WeakPassword)
    }
}

/// Trimmed name, 1..=100 characters.
pub fn normalize_name(raw: &str) -> Result<String, AuthServiceError> {
    let name = raw.trim();
    let len = name.chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        return Err(AuthServiceError::InvalidName);
    }
    Ok(name.to_owned())
}

/// Blank phones are stored as absent.
pub fn normalize_phone(raw: Option<&str>) -> Result<Option<String>, AuthServiceError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(p) if p.chars().count() > MAX_PHONE_LEN => Err(AuthServiceError::InvalidPhone),
        Some(p) => Ok(Some(p.to_owned())),
    }
}
