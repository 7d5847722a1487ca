use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotel_auth_types::identity::Identity;
use hotel_domain::room::{BedType, RoomStatus};

use crate::domain::types::{
    NewRoom, Room, RoomChanges, RoomFilter, RoomStatistics, RoomType, RoomWithType,
};
use crate::error::RoomsServiceError;
use crate::handlers::room_type::RoomTypeResponse;
use crate::handlers::{ADMIN_ROLES, STAFF_ROLES, authorize};
use crate::state::AppState;
use crate::usecase::room::{
    CreateRoomUseCase, DeleteRoomUseCase, GetRoomStatisticsUseCase, GetRoomUseCase,
    GetRoomsUseCase, UpdateRoomUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct RoomResponse {
    pub id: Uuid,
    pub room_number: String,
    pub room_type_id: Uuid,
    pub floor: i32,
    pub status: RoomStatus,
    pub is_active: bool,
    pub notes: Option<String>,
    #[serde(serialize_with = "hotel_core::serde::option_to_rfc3339_ms")]
    pub last_cleaned: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(serialize_with = "hotel_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "hotel_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Room> for RoomResponse {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            room_number: r.room_number,
            room_type_id: r.room_type_id,
            floor: r.floor,
            status: r.status,
            is_active: r.is_active,
            notes: r.notes,
            last_cleaned: r.last_cleaned,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Type fields shown next to each room in listings.
#[derive(Serialize)]
pub struct RoomTypeSummary {
    pub id: Uuid,
    pub name: String,
    pub base_price_cents: i64,
    pub capacity: i32,
    pub bed_type: BedType,
}

impl From<RoomType> for RoomTypeSummary {
    fn from(t: RoomType) -> Self {
        Self {
            id: t.id,
            name: t.name,
            base_price_cents: t.base_price_cents,
            capacity: t.capacity,
            bed_type: t.bed_type,
        }
    }
}

#[derive(Serialize)]
pub struct RoomListItem {
    #[serde(flatten)]
    pub room: RoomResponse,
    pub room_type: Option<RoomTypeSummary>,
}

#[derive(Serialize)]
pub struct RoomDetailResponse {
    #[serde(flatten)]
    pub room: RoomResponse,
    pub room_type: Option<RoomTypeResponse>,
}

impl From<RoomWithType> for RoomListItem {
    fn from(r: RoomWithType) -> Self {
        Self {
            room: r.room.into(),
            room_type: r.room_type.map(Into::into),
        }
    }
}

impl From<RoomWithType> for RoomDetailResponse {
    fn from(r: RoomWithType) -> Self {
        Self {
            room: r.room.into(),
            room_type: r.room_type.map(Into::into),
        }
    }
}

// ── POST /rooms ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub room_number: String,
    pub room_type_id: Uuid,
    pub floor: i32,
    pub notes: Option<String>,
}

pub async fn create_room(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomResponse>), RoomsServiceError> {
    authorize(&identity, STAFF_ROLES)?;
    let usecase = CreateRoomUseCase {
        rooms: state.room_repo(),
        room_types: state.room_type_repo(),
    };
    let room = usecase
        .execute(NewRoom {
            room_number: body.room_number,
            room_type_id: body.room_type_id,
            floor: body.floor,
            notes: body.notes,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(room.into())))
}

// ── GET /rooms ───────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct RoomListQuery {
    pub status: Option<RoomStatus>,
    pub floor: Option<i32>,
    pub room_type_id: Option<Uuid>,
}

pub async fn get_rooms(
    State(state): State<AppState>,
    Query(query): Query<RoomListQuery>,
) -> Result<Json<Vec<RoomListItem>>, RoomsServiceError> {
    let usecase = GetRoomsUseCase {
        rooms: state.room_repo(),
    };
    let rooms = usecase
        .execute(RoomFilter {
            status: query.status,
            floor: query.floor,
            room_type_id: query.room_type_id,
        })
        .await?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

// ── GET /rooms/statistics ────────────────────────────────────────────────────

pub async fn get_room_statistics(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<RoomStatistics>, RoomsServiceError> {
    authorize(&identity, STAFF_ROLES)?;
    let usecase = GetRoomStatisticsUseCase {
        rooms: state.room_repo(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── GET /rooms/{id} ──────────────────────────────────────────────────────────

pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoomDetailResponse>, RoomsServiceError> {
    let usecase = GetRoomUseCase {
        rooms: state.room_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PUT /rooms/{id} ──────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateRoomRequest {
    pub room_number: Option<String>,
    pub room_type_id: Option<Uuid>,
    pub floor: Option<i32>,
    pub status: Option<RoomStatus>,
    pub is_active: Option<bool>,
    pub notes: Option<String>,
}

pub async fn update_room(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateRoomRequest>,
) -> Result<Json<RoomResponse>, RoomsServiceError> {
    authorize(&identity, STAFF_ROLES)?;
    let usecase = UpdateRoomUseCase {
        rooms: state.room_repo(),
        room_types: state.room_type_repo(),
    };
    let changes = RoomChanges {
        room_number: body.room_number,
        room_type_id: body.room_type_id,
        floor: body.floor,
        status: body.status,
        is_active: body.is_active,
        notes: body.notes,
    };
    Ok(Json(usecase.execute(id, changes).await?.into()))
}

// ── DELETE /rooms/{id} ───────────────────────────────────────────────────────

pub async fn delete_room(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, RoomsServiceError> {
    authorize(&identity, ADMIN_ROLES)?;
    let usecase = DeleteRoomUseCase {
        rooms: state.room_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
