use tracing::info;
use uuid::Uuid;

use crate::domain::repository::{RoomRepository, RoomTypeRepository};
use crate::domain::types::{NewRoom, Room, RoomChanges, RoomFilter, RoomStatistics, RoomWithType};
use crate::error::RoomsServiceError;

/// Rooms may only reference a type that exists and is active.
async fn ensure_room_type<T: RoomTypeRepository>(
    room_types: &T,
    id: Uuid,
) -> Result<(), RoomsServiceError> {
    match room_types.find_by_id(id).await? {
        Some(t) if t.is_active => Ok(()),
        _ => Err(RoomsServiceError::UnknownRoomType),
    }
}

// ── CreateRoom ───────────────────────────────────────────────────────────────

pub struct CreateRoomUseCase<R: RoomRepository, T: RoomTypeRepository> {
    pub rooms: R,
    pub room_types: T,
}

impl<R: RoomRepository, T: RoomTypeRepository> CreateRoomUseCase<R, T> {
    pub async fn execute(&self, input: NewRoom) -> Result<Room, RoomsServiceError> {
        let input = input.normalized()?;
        ensure_room_type(&self.room_types, input.room_type_id).await?;

        if self.rooms.find_by_number(&input.room_number).await?.is_some() {
            return Err(RoomsServiceError::RoomNumberTaken);
        }

        let room = self.rooms.create(input).await?;
        info!(room_id = %room.id, room_number = %room.room_number, "room created");
        Ok(room)
    }
}

// ── GetRooms ─────────────────────────────────────────────────────────────────

pub struct GetRoomsUseCase<R: RoomRepository> {
    pub rooms: R,
}

impl<R: RoomRepository> GetRoomsUseCase<R> {
    pub async fn execute(&self, filter: RoomFilter) -> Result<Vec<RoomWithType>, RoomsServiceError> {
        self.rooms.list_active(filter).await
    }
}

// ── GetRoom ──────────────────────────────────────────────────────────────────

pub struct GetRoomUseCase<R: RoomRepository> {
    pub rooms: R,
}

impl<R: RoomRepository> GetRoomUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<RoomWithType, RoomsServiceError> {
        self.rooms
            .find_active_with_type(id)
            .await?
            .ok_or(RoomsServiceError::RoomNotFound)
    }
}

// ── UpdateRoom ───────────────────────────────────────────────────────────────

pub struct UpdateRoomUseCase<R: RoomRepository, T: RoomTypeRepository> {
    pub rooms: R,
    pub room_types: T,
}

impl<R: RoomRepository, T: RoomTypeRepository> UpdateRoomUseCase<R, T> {
    pub async fn execute(&self, id: Uuid, changes: RoomChanges) -> Result<Room, RoomsServiceError> {
        let changes = changes.normalized()?;

        if self.rooms.find_by_id(id).await?.is_none() {
            return Err(RoomsServiceError::RoomNotFound);
        }
        if let Some(room_type_id) = changes.room_type_id {
            ensure_room_type(&self.room_types, room_type_id).await?;
        }
        if let Some(number) = changes.room_number.as_deref() {
            let taken = self
                .rooms
                .find_by_number(number)
                .await?
                .is_some_and(|existing| existing.id != id);
            if taken {
                return Err(RoomsServiceError::RoomNumberTaken);
            }
        }

        self.rooms
            .update(id, changes)
            .await?
            .ok_or(RoomsServiceError::RoomNotFound)
    }
}

// ── DeleteRoom ───────────────────────────────────────────────────────────────

pub struct DeleteRoomUseCase<R: RoomRepository> {
    pub rooms: R,
}

impl<R: RoomRepository> DeleteRoomUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), RoomsServiceError> {
        if !self.rooms.deactivate(id).await? {
            return Err(RoomsServiceError::RoomNotFound);
        }
        info!(room_id = %id, "room deactivated");
        Ok(())
    }
}

// ── RoomStatistics ───────────────────────────────────────────────────────────

pub struct GetRoomStatisticsUseCase<R: RoomRepository> {
    pub rooms: R,
}

impl<R: RoomRepository> GetRoomStatisticsUseCase<R> {
    pub async fn execute(&self) -> Result<RoomStatistics, RoomsServiceError> {
        let rooms = self.rooms.list_active(RoomFilter::default()).await?;
        Ok(RoomStatistics::from_rooms(rooms.iter().map(|r| &r.room)))
    }
}
