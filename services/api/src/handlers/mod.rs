pub mod admin;
pub mod auth;
pub mod connections;
pub mod profile;
pub mod public;

use axum::extract::Multipart;
use serde::Serialize;

use vanta_domain::badge::BadgeSource;
use vanta_domain::link::{LinkType, Platform};
use vanta_domain::media::MediaType;
use vanta_domain::profile::{BackgroundEffect, Theme};
use vanta_domain::user::UserRole;

use crate::domain::types::{Badge, Link, MediaItem, User};
use crate::error::ApiError;

// ── Shared response shapes ───────────────────────────────────────────────────
//
// JSON field names are camelCase throughout; that is the contract with the
// frontend.

/// Owner-facing account projection. Includes the email; never returned for
/// other people's profiles.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
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
    #[serde(serialize_with = "vanta_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl UserResponse {
    pub fn from_user(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            role: user.role,
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
            updated_at: user.updated_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: String,
    pub title: String,
    pub url: String,
    pub link_type: LinkType,
    pub platform: Platform,
    pub position: i32,
    #[serde(serialize_with = "vanta_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl LinkResponse {
    pub fn from_link(link: Link) -> Self {
        Self {
            id: link.id.to_string(),
            title: link.title,
            url: link.url,
            link_type: link.link_type,
            platform: link.platform,
            position: link.position,
            created_at: link.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponse {
    pub id: String,
    pub media_type: MediaType,
    pub title: String,
    pub description: String,
    pub url: String,
    pub position: i32,
    #[serde(serialize_with = "vanta_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl MediaResponse {
    pub fn from_item(item: MediaItem) -> Self {
        Self {
            id: item.id.to_string(),
            media_type: item.media_type,
            title: item.title,
            description: item.description,
            url: item.url,
            position: item.position,
            created_at: item.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub icon_url: Option<String>,
    pub description: Option<String>,
    pub source: BadgeSource,
    #[serde(serialize_with = "vanta_core::serde::to_rfc3339_ms")]
    pub awarded_at: chrono::DateTime<chrono::Utc>,
}

impl BadgeResponse {
    pub fn from_badge(badge: Badge) -> Self {
        Self {
            id: badge.id.to_string(),
            code: badge.code,
            name: badge.name,
            icon_url: badge.icon_url,
            description: badge.description,
            source: badge.source,
            awarded_at: badge.awarded_at,
        }
    }
}

// ── Multipart helper ─────────────────────────────────────────────────────────

/// Pull the first file field out of a multipart body.
pub(crate) async fn read_upload(multipart: &mut Multipart) -> Result<(String, Vec<u8>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::MissingData)?
    {
        if field.file_name().is_none() {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_owned();
        let bytes = field.bytes().await.map_err(|_| ApiError::MissingData)?;
        return Ok((filename, bytes.to_vec()));
    }
    Err(ApiError::MissingData)
}
