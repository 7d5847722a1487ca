use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Rooms service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum RoomsServiceError {
    #[error("room type not found")]
    RoomTypeNotFound,
    #[error("room not found")]
    RoomNotFound,
    #[error("room type does not exist")]
    UnknownRoomType,
    #[error("room number already exists")]
    RoomNumberTaken,
    #[error("invalid name")]
    InvalidName,
    #[error("base price must be positive")]
    InvalidPrice,
    #[error("capacity must be between 1 and 10")]
    InvalidCapacity,
    #[error("size must be positive")]
    InvalidSize,
    #[error("invalid amenity")]
    InvalidAmenity,
    #[error("invalid room number")]
    InvalidRoomNumber,
    #[error("floor must be at least 1")]
    InvalidFloor,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RoomsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RoomTypeNotFound => "ROOM_TYPE_NOT_FOUND",
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::UnknownRoomType => "UNKNOWN_ROOM_TYPE",
            Self::RoomNumberTaken => "ROOM_NUMBER_TAKEN",
            Self::InvalidName => "INVALID_NAME",
            Self::InvalidPrice => "INVALID_PRICE",
            Self::InvalidCapacity => "INVALID_CAPACITY",
            Self::InvalidSize => "INVALID_SIZE",
            Self::InvalidAmenity => "INVALID_AMENITY",
            Self::InvalidRoomNumber => "INVALID_ROOM_NUMBER",
            Self::InvalidFloor => "INVALID_FLOOR",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for RoomsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::RoomTypeNotFound | Self::RoomNotFound => StatusCode::NOT_FOUND,
            Self::RoomNumberTaken => StatusCode::CONFLICT,
            Self::UnknownRoomType
            | Self::InvalidName
            | Self::InvalidPrice
            | Self::InvalidCapacity
            | Self::InvalidSize
            | Self::InvalidAmenity
            | Self::InvalidRoomNumber
            | Self::InvalidFloor => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
