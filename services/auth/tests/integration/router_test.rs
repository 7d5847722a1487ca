use axum::http::{HeaderValue, StatusCode, header::AUTHORIZATION};
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

use hotel_auth::infra::password::Argon2Hasher;
use hotel_auth::router::build_router;
use hotel_auth::state::AppState;
use hotel_domain::user::UserRole;
use hotel_testing::auth::MockAuth;
use hotel_testing::db::unreachable_database;

use crate::helpers::{TEST_ACCESS_SECRET, TEST_REFRESH_SECRET};

// The database is never reachable here: these cases must be decided before any query.
fn server() -> TestServer {
    let state = AppState::new(
        DatabaseConnection::Disconnected,
        TEST_ACCESS_SECRET.to_owned(),
        TEST_REFRESH_SECRET.to_owned(),
        Argon2Hasher::default(),
    );
    TestServer::new(build_router(state)).unwrap()
}

// Queries reach a pool whose server is down and fail with a database error.
async fn failing_server() -> TestServer {
    let state = AppState::new(
        unreachable_database().await,
        TEST_ACCESS_SECRET.to_owned(),
        TEST_REFRESH_SECRET.to_owned(),
        Argon2Hasher::default(),
    );
    TestServer::new(build_router(state)).unwrap()
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

#[tokio::test]
async fn should_report_liveness_but_not_readiness_without_database() {
    let server = server();
    server.get("/healthz").await.assert_status_ok();
    server
        .get("/readyz")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_return_profile_from_access_token() {
    let auth = MockAuth::new(UserRole::Staff);

    let response = server()
        .get("/auth/profile")
        .add_header(AUTHORIZATION, bearer(&auth.access_token(TEST_ACCESS_SECRET)))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["user_id"], auth.user_id.to_string());
    assert_eq!(body["email"], auth.email);
    assert_eq!(body["role"], "staff");
}

#[tokio::test]
async fn should_require_bearer_token_for_profile() {
    let response = server().get("/auth/profile").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["kind"], "MISSING_TOKEN");
}

#[tokio::test]
async fn should_reject_expired_access_token() {
    let token = MockAuth::new(UserRole::Customer).access_token_expiring_in(TEST_ACCESS_SECRET, -5);

    let response = server()
        .get("/auth/profile")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["kind"], "TOKEN_EXPIRED");
}

#[tokio::test]
async fn should_reject_token_signed_with_refresh_secret() {
    let token = MockAuth::new(UserRole::Admin).access_token(TEST_REFRESH_SECRET);

    let response = server()
        .get("/auth/profile")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_TOKEN");
}

#[tokio::test]
async fn should_validate_registration_before_touching_database() {
    let response = server()
        .post("/auth/register")
        .json(&json!({
            "email": "a@x.com",
            "password": "short",
            "first_name": "Ada",
            "last_name": "Lovelace",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "WEAK_PASSWORD");
}

#[tokio::test]
async fn should_map_database_failure_to_internal_error() {
    let response = failing_server()
        .await
        .post("/auth/register")
        .json(&json!({
            "email": "a@x.com",
            "password": "Passw0rd",
            "first_name": "Ada",
            "last_name": "Lovelace",
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INTERNAL");
    assert_eq!(body["message"], "internal error");
}

#[tokio::test]
async fn should_reject_empty_login_password() {
    let response = server()
        .post("/auth/login")
        .json(&json!({ "email": "a@x.com", "password": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "MISSING_DATA");
}

#[tokio::test]
async fn should_reject_garbage_refresh_token() {
    let response = server()
        .post("/auth/refresh-token")
        .json(&json!({ "refresh_token": "not-a-jwt" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_TOKEN");
}

#[tokio::test]
async fn should_reject_empty_logout_token() {
    let response = server()
        .post("/auth/logout")
        .json(&json!({ "refresh_token": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_hide_database_failure_on_login() {
    let response = failing_server()
        .await
        .post("/auth/login")
        .json(&json!({ "email": "a@x.com", "password": "Passw0rd" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INTERNAL");
    assert_eq!(body["message"], "internal error");
}
