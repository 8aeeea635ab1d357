use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use vanta_auth_types::identity::Identity;

use crate::error::ApiError;
use crate::handlers::UserResponse;
use crate::state::AppState;
use crate::usecase::account::{
    AuthOutput, GetUserUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::usecase::oauth::{DiscordLoginUseCase, discord_authorize_url};

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

impl AuthResponse {
    fn from_output(output: AuthOutput) -> Self {
        Self {
            token: output.token,
            user: UserResponse::from_user(output.user),
        }
    }
}

// ── POST /api/auth/register ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let usecase = RegisterUseCase {
        repo: state.account_repo(),
        admin_emails: state.config.admin_emails.clone(),
        jwt_secret: state.config.jwt_secret.clone(),
    };
    let output = usecase
        .execute(RegisterInput {
            username: body.username,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(AuthResponse::from_output(output))))
}

// ── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let usecase = LoginUseCase {
        repo: state.account_repo(),
        jwt_secret: state.config.jwt_secret.clone(),
    };
    let output = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(AuthResponse::from_output(output)))
}

// ── GET /api/auth/me ─────────────────────────────────────────────────────────

pub async fn get_me(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = GetUserUseCase {
        repo: state.account_repo(),
    };
    let user = usecase.execute(identity.user_id).await?;
    Ok(Json(UserResponse::from_user(user)))
}

// ── GET /api/auth/discord/url ────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AuthUrlResponse {
    pub url: String,
}

pub async fn discord_auth_url(
    State(state): State<AppState>,
) -> Result<Json<AuthUrlResponse>, ApiError> {
    let config = state
        .config
        .discord
        .as_ref()
        .ok_or(ApiError::OAuthNotConfigured)?;
    Ok(Json(AuthUrlResponse {
        url: discord_authorize_url(config),
    }))
}

// ── POST /api/auth/discord ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct OAuthCodeRequest {
    pub code: String,
}

pub async fn discord_login(
    State(state): State<AppState>,
    Json(body): Json<OAuthCodeRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let usecase = DiscordLoginUseCase {
        accounts: state.account_repo(),
        connections: state.connection_repo(),
        badges: state.badge_repo(),
        discord: state.discord_client()?,
        admin_emails: state.config.admin_emails.clone(),
        jwt_secret: state.config.jwt_secret.clone(),
    };
    let output = usecase.execute(&body.code).await?;
    Ok(Json(AuthResponse::from_output(output)))
}
