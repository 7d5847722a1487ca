use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use hotel_auth::config::AuthConfig;
use hotel_auth::infra::password::Argon2Hasher;
use hotel_auth::router::build_router;
use hotel_auth::state::AppState;
use hotel_core::config::Config as _;
use hotel_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");

    let config = AuthConfig::from_env().context("load auth config")?;
    config.validate()?;

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;

    let state = AppState::new(
        db,
        config.jwt_access_secret,
        config.jwt_refresh_secret,
        Argon2Hasher::new(),
    );

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
