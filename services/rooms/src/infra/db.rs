use anyhow::Context as _;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder, SqlErr,
};
use uuid::Uuid;

use hotel_domain::room::{BedType, RoomStatus};
use hotel_rooms_schema::{room_types, rooms};

use crate::domain::repository::{RoomRepository, RoomTypeRepository};
use crate::domain::types::{
    NewRoom, NewRoomType, Room, RoomChanges, RoomFilter, RoomType, RoomTypeChanges, RoomWithType,
};
use crate::error::RoomsServiceError;

// ── RoomType repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoomTypeRepository {
    pub db: DatabaseConnection,
}

impl RoomTypeRepository for DbRoomTypeRepository {
    async fn create(&self, new: NewRoomType) -> Result<RoomType, RoomsServiceError> {
        let now = Utc::now();
        let model = room_types::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(new.name),
            description: Set(new.description),
            base_price_cents: Set(new.base_price_cents),
            capacity: Set(new.capacity),
            bed_type: Set(new.bed_type.as_str().to_owned()),
            size: Set(new.size),
            amenities: Set(serde_json::Value::from(new.amenities)),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .context("insert room type")?;
        room_type_from_model(model)
    }

    async fn list_active(&self) -> Result<Vec<RoomType>, RoomsServiceError> {
        let models = room_types::Entity::find()
            .filter(room_types::Column::IsActive.eq(true))
            .order_by_asc(room_types::Column::Name)
            .all(&self.db)
            .await
            .context("list active room types")?;
        models.into_iter().map(room_type_from_model).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<RoomType>, RoomsServiceError> {
        let model = room_types::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find room type by id")?;
        model.map(room_type_from_model).transpose()
    }

    async fn update(
        &self,
        id: Uuid,
        changes: RoomTypeChanges,
    ) -> Result<Option<RoomType>, RoomsServiceError> {
        let Some(model) = room_types::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find room type for update")?
        else {
            return Ok(None);
        };

        let mut room_type = room_type_from_model(model.clone())?;
        changes.apply(&mut room_type);

        let mut am = model.into_active_model();
        am.name = Set(room_type.name);
        am.description = Set(room_type.description);
        am.base_price_cents = Set(room_type.base_price_cents);
        am.capacity = Set(room_type.capacity);
        am.bed_type = Set(room_type.bed_type.as_str().to_owned());
        am.size = Set(room_type.size);
        am.amenities = Set(serde_json::Value::from(room_type.amenities));
        am.is_active = Set(room_type.is_active);
        am.updated_at = Set(Utc::now());
        let updated = am.update(&self.db).await.context("update room type")?;
        room_type_from_model(updated).map(Some)
    }

    async fn deactivate(&self, id: Uuid) -> Result<bool, RoomsServiceError> {
        let result = room_types::Entity::update_many()
            .col_expr(room_types::Column::IsActive, Expr::value(false))
            .col_expr(room_types::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(room_types::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("deactivate room type")?;
        Ok(result.rows_affected > 0)
    }
}

fn room_type_from_model(m: room_types::Model) -> Result<RoomType, RoomsServiceError> {
    let bed_type = m
        .bed_type
        .parse::<BedType>()
        .with_context(|| format!("stored bed type for room type {}", m.id))?;
    let amenities: Vec<String> = serde_json::from_value(m.amenities)
        .with_context(|| format!("stored amenities for room type {}", m.id))?;
    Ok(RoomType {
        id: m.id,
        name: m.name,
        description: m.description,
        base_price_cents: m.base_price_cents,
        capacity: m.capacity,
        bed_type,
        size: m.size,
        amenities,
        is_active: m.is_active,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

// ── Room repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoomRepository {
    pub db: DatabaseConnection,
}

impl RoomRepository for DbRoomRepository {
    async fn create(&self, new: NewRoom) -> Result<Room, RoomsServiceError> {
        let now = Utc::now();
        let result = rooms::ActiveModel {
            id: Set(Uuid::now_v7()),
            room_number: Set(new.room_number),
            room_type_id: Set(new.room_type_id),
            floor: Set(new.floor),
            status: Set(RoomStatus::default().as_str().to_owned()),
            is_active: Set(true),
            notes: Set(new.notes),
            last_cleaned: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(model) => room_from_model(model),
            Err(e) => Err(map_room_write_error(e, "insert room")),
        }
    }

    async fn find_by_number(&self, room_number: &str) -> Result<Option<Room>, RoomsServiceError> {
        let model = rooms::Entity::find()
            .filter(rooms::Column::RoomNumber.eq(room_number))
            .one(&self.db)
            .await
            .context("find room by number")?;
        model.map(room_from_model).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Room>, RoomsServiceError> {
        let model = rooms::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find room by id")?;
        model.map(room_from_model).transpose()
    }

    async fn find_active_with_type(
        &self,
        id: Uuid,
    ) -> Result<Option<RoomWithType>, RoomsServiceError> {
        let row = rooms::Entity::find_by_id(id)
            .filter(rooms::Column::IsActive.eq(true))
            .find_also_related(room_types::Entity)
            .one(&self.db)
            .await
            .context("find active room with type")?;
        row.map(room_with_type_from_models).transpose()
    }

    async fn list_active(
        &self,
        filter: RoomFilter,
    ) -> Result<Vec<RoomWithType>, RoomsServiceError> {
        let mut query = rooms::Entity::find().filter(rooms::Column::IsActive.eq(true));
        if let Some(status) = filter.status {
            query = query.filter(rooms::Column::Status.eq(status.as_str()));
        }
        if let Some(floor) = filter.floor {
            query = query.filter(rooms::Column::Floor.eq(floor));
        }
        if let Some(room_type_id) = filter.room_type_id {
            query = query.filter(rooms::Column::RoomTypeId.eq(room_type_id));
        }
        let rows = query
            .order_by_asc(rooms::Column::RoomNumber)
            .find_also_related(room_types::Entity)
            .all(&self.db)
            .await
            .context("list active rooms")?;
        rows.into_iter().map(room_with_type_from_models).collect()
    }

    async fn update(
        &self,
        id: Uuid,
        changes: RoomChanges,
    ) -> Result<Option<Room>, RoomsServiceError> {
        let Some(model) = rooms::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find room for update")?
        else {
            return Ok(None);
        };

        let mut room = room_from_model(model.clone())?;
        changes.apply(&mut room);

        let mut am = model.into_active_model();
        am.room_number = Set(room.room_number);
        am.room_type_id = Set(room.room_type_id);
        am.floor = Set(room.floor);
        am.status = Set(room.status.as_str().to_owned());
        am.is_active = Set(room.is_active);
        am.notes = Set(room.notes);
        am.updated_at = Set(Utc::now());
        match am.update(&self.db).await {
            Ok(updated) => room_from_model(updated).map(Some),
            Err(e) => Err(map_room_write_error(e, "update room")),
        }
    }

    async fn deactivate(&self, id: Uuid) -> Result<bool, RoomsServiceError> {
        let result = rooms::Entity::update_many()
            .col_expr(rooms::Column::IsActive, Expr::value(false))
            .col_expr(rooms::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(rooms::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("deactivate room")?;
        Ok(result.rows_affected > 0)
    }
}

/// The room-number unique index is the only unique constraint a room write can hit.
fn map_room_write_error(e: DbErr, what: &'static str) -> RoomsServiceError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => RoomsServiceError::RoomNumberTaken,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => RoomsServiceError::UnknownRoomType,
        _ => anyhow::Error::new(e).context(what).into(),
    }
}

fn room_from_model(m: rooms::Model) -> Result<Room, RoomsServiceError> {
    let status = m
        .status
        .parse::<RoomStatus>()
        .with_context(|| format!("stored status for room {}", m.id))?;
    Ok(Room {
        id: m.id,
        room_number: m.room_number,
        room_type_id: m.room_type_id,
        floor: m.floor,
        status,
        is_active: m.is_active,
        notes: m.notes,
        last_cleaned: m.last_cleaned,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn room_with_type_from_models(
    (room, room_type): (rooms::Model, Option<room_types::Model>),
) -> Result<RoomWithType, RoomsServiceError> {
    Ok(RoomWithType {
        room: room_from_model(room)?,
        room_type: room_type.map(room_type_from_model).transpose()?,
    })
}
