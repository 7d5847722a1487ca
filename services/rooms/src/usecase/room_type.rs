use tracing::info;
use uuid::Uuid;

use crate::domain::repository::RoomTypeRepository;
use crate::domain::types::{NewRoomType, RoomType, RoomTypeChanges};
use crate::error::RoomsServiceError;

// ── CreateRoomType ───────────────────────────────────────────────────────────

pub struct CreateRoomTypeUseCase<R: RoomTypeRepository> {
    pub repo: R,
}

impl<R: RoomTypeRepository> CreateRoomTypeUseCase<R> {
    pub async fn execute(&self, input: NewRoomType) -> Result<RoomType, RoomsServiceError> {
        let room_type = self.repo.create(input.normalized()?).await?;
        info!(room_type_id = %room_type.id, "room type created");
        Ok(room_type)
    }
}

// ── GetRoomTypes ─────────────────────────────────────────────────────────────

pub struct GetRoomTypesUseCase<R: RoomTypeRepository> {
    pub repo: R,
}

impl<R: RoomTypeRepository> GetRoomTypesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<RoomType>, RoomsServiceError> {
        self.repo.list_active().await
    }
}

// ── GetRoomType ──────────────────────────────────────────────────────────────

pub struct GetRoomTypeUseCase<R: RoomTypeRepository> {
    pub repo: R,
}

impl<R: RoomTypeRepository> GetRoomTypeUseCase<R> {
    /// Soft-deleted types are reported as not found.
    pub async fn execute(&self, id: Uuid) -> Result<RoomType, RoomsServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .filter(|t| t.is_active)
            .ok_or(RoomsServiceError::RoomTypeNotFound)
    }
}

// ── UpdateRoomType ───────────────────────────────────────────────────────────

pub struct UpdateRoomTypeUseCase<R: RoomTypeRepository> {
    pub repo: R,
}

impl<R: RoomTypeRepository> UpdateRoomTypeUseCase<R> {
    /// Also reaches soft-deleted types, so `is_active: true` restores one.
    pub async fn execute(
        &self,
        id: Uuid,
        changes: RoomTypeChanges,
    ) -> Result<RoomType, RoomsServiceError> {
        self.repo
            .update(id, changes.normalized()?)
            .await?
            .ok_or(RoomsServiceError::RoomTypeNotFound)
    }
}

// ── DeleteRoomType ───────────────────────────────────────────────────────────

pub struct DeleteRoomTypeUseCase<R: RoomTypeRepository> {
    pub repo: R,
}

impl<R: RoomTypeRepository> DeleteRoomTypeUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), RoomsServiceError> {
        if !self.repo.deactivate(id).await? {
            return Err(RoomsServiceError::RoomTypeNotFound);
        }
        info!(room_type_id = %id, "room type deactivated");
        Ok(())
    }
}
