use anyhow::Context as _;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::domain::repository::CredentialHasher;
use crate::error::AuthServiceError;

/// Argon2id hasher producing PHC strings. Hashing runs on the blocking pool.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// OWASP baseline: 19 MiB, 2 iterations, 1 lane.
    pub fn new() -> Self {
        Self {
            params: Params::new(19 * 1024, 2, 1, None).unwrap_or_default(),
        }
    }

    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher for Argon2Hasher {
    async fn hash(&self, plaintext: &str) -> Result<String, AuthServiceError> {
        let argon2 = self.argon2();
        let plaintext = plaintext.to_owned();
        let hashed = tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(plaintext.as_bytes(), &salt)
                .map(|h| h.to_string())
                .map_err(|e| anyhow::anyhow!("argon2 hash: {e}"))
        })
        .await
        .context("join password hash task")??;
        Ok(hashed)
    }

    async fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, AuthServiceError> {
        let argon2 = self.argon2();
        let plaintext = plaintext.to_owned();
        let hashed = hashed.to_owned();
        let matched = tokio::task::spawn_blocking(move || match PasswordHash::new(&hashed) {
            // Parameters are read from the PHC string, not from `argon2`.
            Ok(parsed) => argon2
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!(error = %e, "stored password hash is not a PHC string");
                false
            }
        })
        .await
        .context("join password verify task")?;
        Ok(matched)
    }
}
