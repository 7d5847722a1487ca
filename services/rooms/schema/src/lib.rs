pub mod room_types;
pub mod rooms;
