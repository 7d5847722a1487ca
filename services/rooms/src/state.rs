use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use hotel_auth_types::identity::AccessSecret;

use crate::infra::db::{DbRoomRepository, DbRoomTypeRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub access_secret: AccessSecret,
}

impl AppState {
    pub fn room_type_repo(&self) -> DbRoomTypeRepository {
        DbRoomTypeRepository {
            db: self.db.clone(),
        }
    }

    pub fn room_repo(&self) -> DbRoomRepository {
        DbRoomRepository {
            db: self.db.clone(),
        }
    }
}
