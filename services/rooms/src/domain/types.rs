use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use hotel_domain::room::{BedType, RoomStatus};

use crate::error::RoomsServiceError;

pub const MAX_TYPE_NAME_LEN: usize = 100;
pub const MAX_ROOM_NUMBER_LEN: usize = 20;
pub const MAX_AMENITY_LEN: usize = 100;
pub const MIN_CAPACITY: i32 = 1;
pub const MAX_CAPACITY: i32 = 10;

/// Sellable category of rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomType {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub base_price_cents: i64,
    pub capacity: i32,
    pub bed_type: BedType,
    pub size: Option<i32>,
    pub amenities: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewRoomType {
    pub name: String,
    pub description: Option<String>,
    pub base_price_cents: i64,
    pub capacity: i32,
    pub bed_type: BedType,
    pub size: Option<i32>,
    pub amenities: Vec<String>,
}

impl NewRoomType {
    /// Trim text fields and check bounds.
    pub fn normalized(self) -> Result<Self, RoomsServiceError> {
        Ok(Self {
            name: normalize_type_name(&self.name)?,
            description: normalize_optional_text(self.description),
            base_price_cents: check_price(self.base_price_cents)?,
            capacity: check_capacity(self.capacity)?,
            bed_type: self.bed_type,
            size: self.size.map(check_size).transpose()?,
            amenities: normalize_amenities(self.amenities)?,
        })
    }
}

/// Partial update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct RoomTypeChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_price_cents: Option<i64>,
    pub capacity: Option<i32>,
    pub bed_type: Option<BedType>,
    pub size: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl RoomTypeChanges {
    pub fn normalized(self) -> Result<Self, RoomsServiceError> {
        Ok(Self {
            name: self.name.as_deref().map(normalize_type_name).transpose()?,
            description: self.description.map(|d| d.trim().to_owned()),
            base_price_cents: self.base_price_cents.map(check_price).transpose()?,
            capacity: self.capacity.map(check_capacity).transpose()?,
            bed_type: self.bed_type,
            size: self.size.map(check_size).transpose()?,
            amenities: self.amenities.map(normalize_amenities).transpose()?,
            is_active: self.is_active,
        })
    }

    pub fn apply(self, t: &mut RoomType) {
        if let Some(v) = self.name {
            t.name = v;
        }
        if let Some(v) = self.description {
            t.description = Some(v);
        }
        if let Some(v) = self.base_price_cents {
            t.base_price_cents = v;
        }
        if let Some(v) = self.capacity {
            t.capacity = v;
        }
        if let Some(v) = self.bed_type {
            t.bed_type = v;
        }
        if let Some(v) = self.size {
            t.size = Some(v);
        }
        if let Some(v) = self.amenities {
            t.amenities = v;
        }
        if let Some(v) = self.is_active {
            t.is_active = v;
        }
    }
}

/// A physical room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Uuid,
    pub room_number: String,
    pub room_type_id: Uuid,
    pub floor: i32,
    pub status: RoomStatus,
    pub is_active: bool,
    pub notes: Option<String>,
    pub last_cleaned: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewRoom {
    pub room_number: String,
    pub room_type_id: Uuid,
    pub floor: i32,
    pub notes: Option<String>,
}

impl NewRoom {
    pub fn normalized(self) -> Result<Self, RoomsServiceError> {
        Ok(Self {
            room_number: normalize_room_number(&self.room_number)?,
            room_type_id: self.room_type_id,
            floor: check_floor(self.floor)?,
            notes: normalize_optional_text(self.notes),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoomChanges {
    pub room_number: Option<String>,
    pub room_type_id: Option<Uuid>,
    pub floor: Option<i32>,
    pub status: Option<RoomStatus>,
    pub is_active: Option<bool>,
    pub notes: Option<String>,
}

impl RoomChanges {
    pub fn normalized(self) -> Result<Self, RoomsServiceError> {
        Ok(Self {
            room_number: self
                .room_number
                .as_deref()
                .map(normalize_room_number)
                .transpose()?,
            room_type_id: self.room_type_id,
            floor: self.floor.map(check_floor).transpose()?,
            status: self.status,
            is_active: self.is_active,
            notes: self.notes.map(|n| n.trim().to_owned()),
        })
    }

    pub fn apply(self, r: &mut Room) {
        if let Some(v) = self.room_number {
            r.room_number = v;
        }
        if let Some(v) = self.room_type_id {
            r.room_type_id = v;
        }
        if let Some(v) = self.floor {
            r.floor = v;
        }
        if let Some(v) = self.status {
            r.status = v;
        }
        if let Some(v) = self.is_active {
            r.is_active = v;
        }
        if let Some(v) = self.notes {
            r.notes = Some(v);
        }
    }
}

/// Room joined with its type. The type is absent only if the row was removed out of band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomWithType {
    pub room: Room,
    pub room_type: Option<RoomType>,
}

/// Filters for listing active rooms. All present filters must match.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomFilter {
    pub status: Option<RoomStatus>,
    pub floor: Option<i32>,
    pub room_type_id: Option<Uuid>,
}

impl RoomFilter {
    pub fn matches(&self, room: &Room) -> bool {
        self.status.is_none_or(|s| room.status == s)
            && self.floor.is_none_or(|f| room.floor == f)
            && self.room_type_id.is_none_or(|t| room.room_type_id == t)
    }
}

/// Occupancy summary over active rooms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoomStatistics {
    pub total: u64,
    pub available: u64,
    pub occupied: u64,
    pub maintenance: u64,
    /// Room count per floor.
    pub by_floor: BTreeMap<i32, u64>,
}

impl RoomStatistics {
    pub fn from_rooms<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> Self {
        let mut stats = Self::default();
        for room in rooms {
            stats.total += 1;
            match room.status {
                RoomStatus::Available => stats.available += 1,
                RoomStatus::Occupied => stats.occupied += 1,
                RoomStatus::Maintenance => stats.maintenance += 1,
                RoomStatus::OutOfOrder | RoomStatus::Cleaning => {}
            }
            *stats.by_floor.entry(room.floor).or_default() += 1;
        }
        stats
    }
}

// ── Validation ───────────────────────────────────────────────────────────────

fn normalize_type_name(raw: &str) -> Result<String, RoomsServiceError> {
    let name = raw.trim();
    let len = name.chars().count();
    if len == 0 || len > MAX_TYPE_NAME_LEN {
        return Err(RoomsServiceError::InvalidName);
    }
    Ok(name.to_owned())
}

fn normalize_room_number(raw: &str) -> Result<String, RoomsServiceError> {
    let number = raw.trim();
    let len = number.chars().count();
    if len == 0 || len > MAX_ROOM_NUMBER_LEN {
        return Err(RoomsServiceError::InvalidRoomNumber);
    }
    Ok(number.to_owned())
}

fn normalize_optional_text(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

fn normalize_amenities(raw: Vec<String>) -> Result<Vec<String>, RoomsServiceError> {
    raw.into_iter()
        .map(|a| {
            let a = a.trim();
            if a.is_empty() || a.chars().count() > MAX_AMENITY_LEN {
                Err(RoomsServiceError::InvalidAmenity)
            } else {
                Ok(a.to_owned())
            }
        })
        .collect()
}

fn check_price(cents: i64) -> Result<i64, RoomsServiceError> {
    if cents > 0 {
        Ok(cents)
    } else {
        Err(RoomsServiceError::InvalidPrice)
    }
}

fn check_capacity(capacity: i32) -> Result<i32, RoomsServiceError> {
    if (MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
        Ok(capacity)
    } else {
        Err(RoomsServiceError::InvalidCapacity)
    }
}

fn check_size(size: i32) -> Result<i32, RoomsServiceError> {
    if size > 0 {
        Ok(size)
    } else {
        Err(RoomsServiceError::InvalidSize)
    }
}

fn check_floor(floor: i32) -> Result<i32, RoomsServiceError> {
    if floor >= 1 {
        Ok(floor)
    } else {
        Err(RoomsServiceError::InvalidFloor)
    }
}
