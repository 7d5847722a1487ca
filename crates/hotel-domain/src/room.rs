//! Room catalogue domain types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Housekeeping / occupancy status of a single room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
    OutOfOrder,
    Cleaning,
}

impl RoomStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
            Self::OutOfOrder => "out_of_order",
            Self::Cleaning => "cleaning",
        }
    }
}

/// Bed configuration offered by a room type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BedType {
    Single,
    Double,
    Queen,
    King,
}

impl BedType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value: {0}")]
pub struct ParseRoomEnumError(pub String);

impl FromStr for RoomStatus {
    type Err = ParseRoomEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "maintenance" => Ok(Self::Maintenance),
            "out_of_order" => Ok(Self::OutOfOrder),
            "cleaning" => Ok(Self::Cleaning),
            other => Err(ParseRoomEnumError(other.to_owned())),
        }
    }
}

impl FromStr for BedType {
    type Err = ParseRoomEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "queen" => Ok(Self::Queen),
            "king" => Ok(Self::King),
            other => Err(ParseRoomEnumError(other.to_owned())),
        }
    }
}
