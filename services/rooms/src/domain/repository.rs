#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{
    NewRoom, NewRoomType, Room, RoomChanges, RoomFilter, RoomType, RoomTypeChanges, RoomWithType,
};
use crate::error::RoomsServiceError;

/// Repository for room types.
pub trait RoomTypeRepository: Send + Sync {
    async fn create(&self, new: NewRoomType) -> Result<RoomType, RoomsServiceError>;

    async fn list_active(&self) -> Result<Vec<RoomType>, RoomsServiceError>;

    /// Lookup regardless of `is_active`.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RoomType>, RoomsServiceError>;

    /// Apply changes and bump `updated_at`. `None` if the id is unknown.
    async fn update(
        &self,
        id: Uuid,
        changes: RoomTypeChanges,
    ) -> Result<Option<RoomType>, RoomsServiceError>;

    /// Soft delete. Returns `false` if the id is unknown.
    async fn deactivate(&self, id: Uuid) -> Result<bool, RoomsServiceError>;
}

/// Repository for rooms.
pub trait RoomRepository: Send + Sync {
    /// Insert a room. Fails with `RoomNumberTaken` on a unique-number conflict.
    async fn create(&self, new: NewRoom) -> Result<Room, RoomsServiceError>;

    /// Lookup by room number regardless of `is_active`.
    async fn find_by_number(&self, room_number: &str) -> Result<Option<Room>, RoomsServiceError>;

    /// Lookup regardless of `is_active`.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Room>, RoomsServiceError>;

    /// Active room joined with its type.
    async fn find_active_with_type(
        &self,
        id: Uuid,
    ) -> Result<Option<RoomWithType>, RoomsServiceError>;

    /// Active rooms matching `filter`, ordered by room number, joined with their type.
    async fn list_active(&self, filter: RoomFilter)
    -> Result<Vec<RoomWithType>, RoomsServiceError>;

    /// Apply changes and bump `updated_at`. `None` if the id is unknown.
    /// Fails with `RoomNumberTaken` on a unique-number conflict.
    async fn update(&self, id: Uuid, changes: RoomChanges)
    -> Result<Option<Room>, RoomsServiceError>;

    /// Soft delete. Returns `false` if the id is unknown.
    async fn deactivate(&self, id: Uuid) -> Result<bool, RoomsServiceError>;
}
