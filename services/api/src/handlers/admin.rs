use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vanta_auth_types::identity::Identity;

use crate::error::ApiError;
use crate::handlers::{BadgeResponse, UserResponse};
use crate::state::AppState;
use crate::usecase::admin::{AdminEditInput, AdminEditPresentationUseCase, FindUserUseCase};
use crate::usecase::badge::{GrantBadgeInput, GrantBadgeUseCase, RevokeBadgeUseCase};

// ── GET /api/admin/users/{query} ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct AdminUserResponse {
    pub user: UserResponse,
    pub badges: Vec<BadgeResponse>,
}

pub async fn get_user(
    identity: Identity,
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<AdminUserResponse>, ApiError> {
    if !identity.is_admin() {
        return Err(ApiError::Forbidden);
    }
    let usecase = FindUserUseCase {
        accounts: state.account_repo(),
        badges: state.badge_repo(),
    };
    let (user, badges) = usecase.execute(&query).await?;
    Ok(Json(AdminUserResponse {
        user: UserResponse::from_user(user),
        badges: badges.into_iter().map(BadgeResponse::from_badge).collect(),
    }))
}

// ── POST /api/admin/users/{id}/badges ────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantBadgeRequest {
    pub code: String,
    pub name: String,
    pub icon_url: Option<String>,
    pub description: Option<String>,
}

pub async fn grant_badge(
    identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<GrantBadgeRequest>,
) -> Result<(StatusCode, Json<BadgeResponse>), ApiError> {
    if !identity.is_admin() {
        return Err(ApiError::Forbidden);
    }
    let usecase = GrantBadgeUseCase {
        accounts: state.account_repo(),
        badges: state.badge_repo(),
    };
    let badge = usecase
        .execute(
            user_id,
            GrantBadgeInput {
                code: body.code,
                name: body.name,
                icon_url: body.icon_url,
                description: body.description,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(BadgeResponse::from_badge(badge))))
}

// ── DELETE /api/admin/users/{id}/badges/{code} ───────────────────────────────

pub async fn revoke_badge(
    identity: Identity,
    State(state): State<AppState>,
    Path((user_id, code)): Path<(Uuid, String)>,
) -> Result<StatusCode, ApiError> {
    if !identity.is_admin() {
        return Err(ApiError::Forbidden);
    }
    let usecase = RevokeBadgeUseCase {
        badges: state.badge_repo(),
    };
    usecase.execute(user_id, &code).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PATCH /api/admin/users/{id} ──────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminEditRequest {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub theme: Option<String>,
}

pub async fn edit_user(
    identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<AdminEditRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    if !identity.is_admin() {
        return Err(ApiError::Forbidden);
    }
    let usecase = AdminEditPresentationUseCase {
        accounts: state.account_repo(),
    };
    let user = usecase
        .execute(
            user_id,
            AdminEditInput {
                display_name: body.display_name,
                bio: body.bio,
                theme: body.theme,
            },
        )
        .await?;
    Ok(Json(UserResponse::from_user(user)))
}
