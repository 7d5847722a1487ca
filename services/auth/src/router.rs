use axum::{
    Router,
    routing::{get, post},
};

use hotel_core::health::{healthz, readyz};
use hotel_core::middleware::with_request_layers;

use crate::handlers::auth::{login, logout, profile, refresh_token, register};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Account
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/profile", get(profile))
        // Session
        .route("/auth/refresh-token", post(refresh_token))
        .route("/auth/logout", post(logout))
        .with_state(state);
    with_request_layers(router)
}
