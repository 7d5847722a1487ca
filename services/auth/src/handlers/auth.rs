use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotel_auth_types::identity::Identity;
use hotel_domain::user::UserRole;

use crate::domain::types::UserProfile;
use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::account::{
    AuthSession, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::usecase::session::{LogoutUseCase, RefreshUseCase};

#[derive(Serialize)]
pub struct SessionResponse {
    pub user: UserProfile,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

impl From<AuthSession> for SessionResponse {
    fn from(s: AuthSession) -> Self {
        Self {
            user: s.user,
            access_token: s.tokens.access_token,
            refresh_token: s.tokens.refresh_token,
            expires_in: s.tokens.expires_in,
        }
    }
}

// ── POST /auth/register ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
        refresh_tokens: state.refresh_token_repo(),
        hasher: state.hasher.clone(),
        issuer: state.issuer.clone(),
    };
    let session = usecase
        .execute(RegisterInput {
            email: body.email,
            password: body.password,
            first_name: body.first_name,
            last_name: body.last_name,
            phone: body.phone,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(SessionResponse::from(session))))
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        refresh_tokens: state.refresh_token_repo(),
        hasher: state.hasher.clone(),
        issuer: state.issuer.clone(),
    };
    let session = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(SessionResponse::from(session)))
}

// ── POST /auth/refresh-token ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

pub async fn refresh_token(
    State(state): State<AppState>,
    Json(body): Json<RefreshTokenRequest>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let usecase = RefreshUseCase {
        users: state.user_repo(),
        refresh_tokens: state.refresh_token_repo(),
        issuer: state.issuer.clone(),
    };
    let tokens = usecase.execute(&body.refresh_token).await?;
    Ok(Json(tokens))
}

// ── POST /auth/logout ────────────────────────────────────────────────────────

pub async fn logout(
    State(state): State<AppState>,
    Json(body): Json<RefreshTokenRequest>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let usecase = LogoutUseCase {
        refresh_tokens: state.refresh_token_repo(),
    };
    usecase.execute(&body.refresh_token).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /auth/profile ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

pub async fn profile(identity: Identity) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        user_id: identity.user_id,
        email: identity.email,
        role: identity.role,
    })
}
