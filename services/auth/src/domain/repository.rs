#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{NewUser, RefreshTokenRecord, User};
use crate::error::AuthServiceError;

/// Persistence port for accounts.
pub trait UserRepository: Send + Sync {
    /// Lookup by normalized (lowercase) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError>;

    /// Insert a new account. Fails with `DuplicateEmail` on a unique-email conflict.
    async fn create(&self, user: NewUser) -> Result<User, AuthServiceError>;

    /// Set `last_login_at = now`.
    async fn touch_last_login(&self, id: Uuid) -> Result<(), AuthServiceError>;
}

/// Persistence port for issued refresh tokens.
pub trait RefreshTokenRepository: Send + Sync {
    async fn save(&self, record: &RefreshTokenRecord) -> Result<(), AuthServiceError>;

    /// Non-revoked row with this token value. Expiry is checked by the caller.
    async fn find_active(&self, token: &str)
    -> Result<Option<RefreshTokenRecord>, AuthServiceError>;

    /// Revoke every row with this token value. Unknown or already revoked tokens are not an error.
    async fn revoke(&self, token: &str) -> Result<(), AuthServiceError>;

    /// Revoke by row id. Returns `true` only if this call flipped the row.
    ///
    /// Standalone store operation. Refresh goes through [`rotate`](Self::rotate),
    /// which runs the same check-and-set inside its transaction.
    async fn revoke_by_id(&self, id: Uuid) -> Result<bool, AuthServiceError>;

    /// Revoke `consumed_id` and insert `replacement` atomically.
    ///
    /// Returns `false`, persisting nothing, when `consumed_id` was already revoked.
    /// Of two racing rotations of the same row exactly one returns `true`.
    async fn rotate(
        &self,
        consumed_id: Uuid,
        replacement: &RefreshTokenRecord,
    ) -> Result<bool, AuthServiceError>;
}

/// One-way password hashing.
pub trait CredentialHasher: Send + Sync {
    /// Salted hash; identical inputs give different outputs.
    async fn hash(&self, plaintext: &str) -> Result<String, AuthServiceError>;

    /// `false` on mismatch or an unparsable hash. Never errors for a wrong password.
    async fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, AuthServiceError>;
}
