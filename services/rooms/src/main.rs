use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use hotel_auth_types::identity::AccessSecret;
use hotel_core::config::Config as _;
use hotel_core::tracing::init_tracing;
use hotel_rooms::config::RoomsConfig;
use hotel_rooms::router::build_router;
use hotel_rooms::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");

    let config = RoomsConfig::from_env().context("load rooms config")?;
    config.validate()?;

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;

    let state = AppState {
        db,
        access_secret: AccessSecret::new(config.jwt_access_secret),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.rooms_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!("rooms service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
