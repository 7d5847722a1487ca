use axum::{Router, routing::get};

use hotel_core::health::{healthz, readyz};
use hotel_core::middleware::with_request_layers;

use crate::handlers::{
    room::{create_room, delete_room, get_room, get_room_statistics, get_rooms, update_room},
    room_type::{
        create_room_type, delete_room_type, get_room_type, get_room_types, update_room_type,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Room types
        .route("/rooms/types", get(get_room_types).post(create_room_type))
        .route(
            "/rooms/types/{id}",
            get(get_room_type)
                .put(update_room_type)
                .delete(delete_room_type),
        )
        // Rooms
        .route("/rooms", get(get_rooms).post(create_room))
        .route("/rooms/statistics", get(get_room_statistics))
        .route(
            "/rooms/{id}",
            get(get_room).put(update_room).delete(delete_room),
        )
        .with_state(state);
    with_request_layers(router)
}
