use tracing::info;

use hotel_domain::user::UserRole;

use crate::domain::repository::{CredentialHasher, RefreshTokenRepository, UserRepository};
use crate::domain::types::{
    NewUser, RefreshTokenRecord, UserProfile, normalize_email, normalize_name, normalize_phone,
    validate_password,
};
use crate::error::AuthServiceError;
use crate::usecase::token::{TokenIssuer, TokenPair};

/// Sanitized user plus a fresh token pair; returned by register and login.
#[derive(Debug)]
pub struct AuthSession {
    pub user: UserProfile,
    pub tokens: TokenPair,
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

pub struct RegisterUseCase<U: UserRepository, R: RefreshTokenRepository, H: CredentialHasher> {
    pub users: U,
    pub refresh_tokens: R,
    pub hasher: H,
    pub issuer: TokenIssuer,
}

impl<U: UserRepository, R: RefreshTokenRepository, H: CredentialHasher> RegisterUseCase<U, R, H> {
    pub async fn execute(&self, input: RegisterInput) -> Result<AuthSession, AuthServiceError> {
        let email = normalize_email(&input.email)?;
        validate_password(&input.password)?;
        let first_name = normalize_name(&input.first_name)?;
        let last_name = normalize_name(&input.last_name)?;
        let phone = normalize_phone(input.phone.as_deref())?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthServiceError::DuplicateEmail);
        }

        let password_hash = self.hasher.hash(&input.password).await?;
        // A concurrent registration can still win the race; `create` maps the
        // unique-email violation to DuplicateEmail.
        let user = self
            .users
            .create(NewUser {
                email,
                password_hash,
                first_name,
                last_name,
                phone,
                role: UserRole::Customer,
            })
            .await?;

        let (tokens, expires_at) = self.issuer.issue_pair(user.id, &user.email, user.role)?;
        self.refresh_tokens
            .save(&RefreshTokenRecord::new(
                user.id,
                tokens.refresh_token.clone(),
                expires_at,
            ))
            .await?;

        info!(user_id = %user.id, "user registered");
        Ok(AuthSession {
            user: user.into(),
            tokens,
        })
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<U: UserRepository, R: RefreshTokenRepository, H: CredentialHasher> {
    pub users: U,
    pub refresh_tokens: R,
    pub hasher: H,
    pub issuer: TokenIssuer,
}

impl<U: UserRepository, R: RefreshTokenRepository, H: CredentialHasher> LoginUseCase<U, R, H> {
    pub async fn execute(&self, input: LoginInput) -> Result<AuthSession, AuthServiceError> {
        if input.password.is_empty() {
            return Err(AuthServiceError::MissingData);
        }
        // A malformed email can never match an account.
        let email = normalize_email(&input.email).map_err(|_| AuthServiceError::InvalidCredentials)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .filter(|u| u.is_active)
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !self.hasher.verify(&input.password, &user.password_hash).await? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        self.users.touch_last_login(user.id).await?;

        let (tokens, expires_at) = self.issuer.issue_pair(user.id, &user.email, user.role)?;
        self.refresh_tokens
            .save(&RefreshTokenRecord::new(
                user.id,
                tokens.refresh_token.clone(),
                expires_at,
            ))
            .await?;

        // Re-read so the response carries the timestamp just written.
        let user = self
            .users
            .find_by_id(user.id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        Ok(AuthSession {
            user: user.into(),
            tokens,
        })
    }
}
