use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vanta_domain::badge::BadgeSource;
use vanta_domain::link::{LinkType, Platform};
use vanta_domain::media::MediaType;
use vanta_domain::profile::{BackgroundEffect, Theme};
use vanta_domain::user::UserRole;

/// Full account row: credentials plus the presentation half of the profile.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of the presentation columns. `None` leaves a column
/// untouched; for the nullable URL columns the inner `Option` clears the
/// column when `None`.
#[derive(Debug, Clone, Default)]
pub struct PresentationPatch {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub theme: Option<Theme>,
    pub background_effect: Option<BackgroundEffect>,
    pub avatar: Option<Option<String>>,
    pub banner_image: Option<Option<String>>,
    pub background_video: Option<Option<String>>,
    pub background_audio: Option<Option<String>>,
    pub background_audio_desktop: Option<Option<String>>,
    pub background_audio_mobile: Option<Option<String>>,
}

impl PresentationPatch {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.bio.is_none()
            && self.theme.is_none()
            && self.background_effect.is_none()
            && self.avatar.is_none()
            && self.banner_image.is_none()
            && self.background_video.is_none()
            && self.background_audio.is_none()
            && self.background_audio_desktop.is_none()
            && self.background_audio_mobile.is_none()
    }
}

/// Profile link.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub url: String,
    pub link_type: LinkType,
    pub platform: Platform,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// Media gallery item.
#[derive(Debug, Clone)]
pub struct MediaItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub media_type: MediaType,
    pub title: String,
    pub description: String,
    pub url: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// Badge grant.
#[derive(Debug, Clone)]
pub struct Badge {
    pub id: Uuid,
    pub user_id: Uuid,
    pub code: String,
    pub name: String,
    pub icon_url: Option<String>,
    pub description: Option<String>,
    pub source: BadgeSource,
    pub awarded_at: DateTime<Utc>,
}

/// Linked third-party account provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Discord,
    Steam,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Discord => "discord",
            Self::Steam => "steam",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "discord" => Some(Self::Discord),
            "steam" => Some(Self::Steam),
            _ => None,
        }
    }
}

/// Linked third-party account.
#[derive(Debug, Clone)]
pub struct Connection {
    pub user_id: Uuid,
    pub provider: Provider,
    pub external_id: String,
    pub display_name: Option<String>,
    pub payload: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mirrored Discord profile data stored in the connection payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscordConnectionData {
    pub username: String,
    pub avatar: Option<String>,
    pub public_flags: u64,
}

/// Steam data stored in the connection payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SteamConnectionData {
    pub persona_name: Option<String>,
    pub avatar_url: Option<String>,
    pub featured_game: Option<FeaturedGame>,
}

/// Game pinned on the public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGame {
    pub app_id: u32,
    pub name: String,
}

/// Discord user as returned by `/users/@me` with `identify email` scopes.
#[derive(Debug, Clone)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub public_flags: u64,
    pub premium_type: u8,
}

/// Steam player summary (GetPlayerSummaries).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamPlayer {
    pub steam_id: String,
    pub persona_name: String,
    pub avatar_url: Option<String>,
    pub profile_url: Option<String>,
    /// 0 = offline, 1 = online, ... per the Steam API.
    pub persona_state: u8,
    pub game_extra_info: Option<String>,
}

/// Owned game entry (GetOwnedGames).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamGame {
    pub app_id: u32,
    pub name: String,
    pub playtime_forever: u32,
    pub img_icon_url: Option<String>,
}
