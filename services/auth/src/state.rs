use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use hotel_auth_types::identity::AccessSecret;

use crate::infra::db::{DbRefreshTokenRepository, DbUserRepository};
use crate::infra::password::Argon2Hasher;
use crate::usecase::token::TokenIssuer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub access_secret: AccessSecret,
    pub issuer: TokenIssuer,
    pub hasher: Argon2Hasher,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        access_secret: String,
        refresh_secret: String,
        hasher: Argon2Hasher,
    ) -> Self {
        Self {
            db,
            access_secret: AccessSecret::new(access_secret.as_str()),
            issuer: TokenIssuer::new(access_secret, refresh_secret),
            hasher,
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn refresh_token_repo(&self) -> DbRefreshTokenRepository {
        DbRefreshTokenRepository {
            db: self.db.clone(),
        }
    }
}
