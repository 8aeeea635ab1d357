use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use vanta_domain::profile::{BackgroundEffect, Theme};

use crate::domain::types::{FeaturedGame, SteamPlayer, User};
use crate::error::ApiError;
use crate::handlers::{BadgeResponse, LinkResponse, MediaResponse};
use crate::state::AppState;
use crate::usecase::public::{
    CheckUsernameUseCase, GetPublicProfileUseCase, ListPublicUsersUseCase, PublicSteamInfo,
};

/// Public projection of an account: no email, no role, no credentials.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUserResponse {
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub banner_image: Option<String>,
    pub theme: Theme,
    pub background_effect: BackgroundEffect,
    pub background_video: Option<String>,
    pub background_audio: Option<String>,
    pub background_audio_desktop: Option<String>,
    pub background_audio_mobile: Option<String>,
    #[serde(serialize_with = "vanta_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PublicUserResponse {
    fn from_user(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            display_name: user.display_name,
            bio: user.bio,
            avatar: user.avatar,
            banner_image: user.banner_image,
            theme: user.theme,
            background_effect: user.background_effect,
            background_video: user.background_video,
            background_audio: user.background_audio,
            background_audio_desktop: user.background_audio_desktop,
            background_audio_mobile: user.background_audio_mobile,
            created_at: user.created_at,
        }
    }
}

// ── GET /api/public/users ────────────────────────────────────────────────────

/// Directory entry: just enough to render a profile card.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUserCard {
    pub username: String,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub theme: Theme,
}

impl PublicUserCard {
    pub fn from_user(user: User) -> Self {
        Self {
            username: user.username,
            display_name: user.display_name,
            avatar: user.avatar,
            bio: user.bio,
            theme: user.theme,
        }
    }
}

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicUserCard>>, ApiError> {
    let usecase = ListPublicUsersUseCase {
        accounts: state.account_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(PublicUserCard::from_user).collect()))
}

// ── GET /api/public/users/{username} ─────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordPublicResponse {
    pub username: String,
    pub avatar: Option<String>,
    pub public_flags: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamPublicResponse {
    pub persona_name: Option<String>,
    pub avatar_url: Option<String>,
    pub featured_game: Option<FeaturedGame>,
    /// Live player summary; absent when the Steam API is unreachable.
    pub live: Option<SteamPlayer>,
}

impl SteamPublicResponse {
    fn from_info(info: PublicSteamInfo) -> Self {
        Self {
            persona_name: info.persona_name,
            avatar_url: info.avatar_url,
            featured_game: info.featured_game,
            live: info.live,
        }
    }
}

#[derive(Serialize)]
pub struct PublicProfileResponse {
    pub user: PublicUserResponse,
    pub links: Vec<LinkResponse>,
    pub media: Vec<MediaResponse>,
    pub badges: Vec<BadgeResponse>,
    pub discord: Option<DiscordPublicResponse>,
    pub steam: Option<SteamPublicResponse>,
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<PublicProfileResponse>, ApiError> {
    let usecase = GetPublicProfileUseCase {
        accounts: state.account_repo(),
        links: state.link_repo(),
        media: state.media_repo(),
        badges: state.badge_repo(),
        connections: state.connection_repo(),
        steam: state.steam_client(),
    };
    let profile = usecase.execute(&username).await?;
    Ok(Json(PublicProfileResponse {
        user: PublicUserResponse::from_user(profile.user),
        links: profile
            .links
            .into_iter()
            .map(LinkResponse::from_link)
            .collect(),
        media: profile
            .media
            .into_iter()
            .map(MediaResponse::from_item)
            .collect(),
        badges: profile
            .badges
            .into_iter()
            .map(BadgeResponse::from_badge)
            .collect(),
        discord: profile.discord.map(|d| DiscordPublicResponse {
            username: d.username,
            avatar: d.avatar,
            public_flags: d.public_flags,
        }),
        steam: profile.steam.map(SteamPublicResponse::from_info),
    }))
}

// ── GET /api/public/check-username/{username} ────────────────────────────────

#[derive(Serialize)]
pub struct UsernameCheckResponse {
    pub valid: bool,
    pub available: bool,
}

pub async fn check_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UsernameCheckResponse>, ApiError> {
    let usecase = CheckUsernameUseCase {
        accounts: state.account_repo(),
    };
    let check = usecase.execute(&username).await?;
    Ok(Json(UsernameCheckResponse {
        valid: check.valid,
        available: check.available,
    }))
}
