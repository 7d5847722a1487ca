use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotel_auth_types::identity::Identity;
use hotel_domain::room::BedType;

use crate::domain::types::{NewRoomType, RoomType, RoomTypeChanges};
use crate::error::RoomsServiceError;
use crate::handlers::{ADMIN_ROLES, STAFF_ROLES, authorize};
use crate::state::AppState;
use crate::usecase::room_type::{
    CreateRoomTypeUseCase, DeleteRoomTypeUseCase, GetRoomTypeUseCase, GetRoomTypesUseCase,
    UpdateRoomTypeUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct RoomTypeResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub base_price_cents: i64,
    pub capacity: i32,
    pub bed_type: BedType,
    pub size: Option<i32>,
    pub amenities: Vec<String>,
    pub is_active: bool,
    #[serde(serialize_with = "hotel_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "hotel_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<RoomType> for RoomTypeResponse {
    fn from(t: RoomType) -> Self {
        Self {
            id: t.id,
            name: t.name,
            description: t.description,
            base_price_cents: t.base_price_cents,
            capacity: t.capacity,
            bed_type: t.bed_type,
            size: t.size,
            amenities: t.amenities,
            is_active: t.is_active,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

// ── POST /rooms/types ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateRoomTypeRequest {
    pub name: String,
    pub description: Option<String>,
    pub base_price_cents: i64,
    pub capacity: i32,
    pub bed_type: BedType,
    pub size: Option<i32>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

pub async fn create_room_type(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateRoomTypeRequest>,
) -> Result<(StatusCode, Json<RoomTypeResponse>), RoomsServiceError> {
    authorize(&identity, STAFF_ROLES)?;
    let usecase = CreateRoomTypeUseCase {
        repo: state.room_type_repo(),
    };
    let room_type = usecase
        .execute(NewRoomType {
            name: body.name,
            description: body.description,
            base_price_cents: body.base_price_cents,
            capacity: body.capacity,
            bed_type: body.bed_type,
            size: body.size,
            amenities: body.amenities,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(room_type.into())))
}

// ── GET /rooms/types ─────────────────────────────────────────────────────────

pub async fn get_room_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoomTypeResponse>>, RoomsServiceError> {
    let usecase = GetRoomTypesUseCase {
        repo: state.room_type_repo(),
    };
    let types = usecase.execute().await?;
    Ok(Json(types.into_iter().map(Into::into).collect()))
}

// ── GET /rooms/types/{id} ────────────────────────────────────────────────────

pub async fn get_room_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoomTypeResponse>, RoomsServiceError> {
    let usecase = GetRoomTypeUseCase {
        repo: state.room_type_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PUT /rooms/types/{id} ────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateRoomTypeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_price_cents: Option<i64>,
    pub capacity: Option<i32>,
    pub bed_type: Option<BedType>,
    pub size: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

pub async fn update_room_type(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateRoomTypeRequest>,
) -> Result<Json<RoomTypeResponse>, RoomsServiceError> {
    authorize(&identity, STAFF_ROLES)?;
    let usecase = UpdateRoomTypeUseCase {
        repo: state.room_type_repo(),
    };
    let changes = RoomTypeChanges {
        name: body.name,
        description: body.description,
        base_price_cents: body.base_price_cents,
        capacity: body.capacity,
        bed_type: body.bed_type,
        size: body.size,
        amenities: body.amenities,
        is_active: body.is_active,
    };
    Ok(Json(usecase.execute(id, changes).await?.into()))
}

// ── DELETE /rooms/types/{id} ─────────────────────────────────────────────────

pub async fn delete_room_type(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, RoomsServiceError> {
    authorize(&identity, ADMIN_ROLES)?;
    let usecase = DeleteRoomTypeUseCase {
        repo: state.room_type_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
