//! Link platform allow-list and derived link type.

use serde::{Deserialize, Serialize};

/// Broad category of a profile link, derived from its [`Platform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Website,
    Social,
    Custom,
}

impl LinkType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Social => "social",
            Self::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "website" => Some(Self::Website),
            "social" => Some(Self::Social),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Allow-listed link platforms. Anything outside the list maps to `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Github,
    Instagram,
    Youtube,
    Reddit,
    Discord,
    X,
    Twitter,
    Tiktok,
    Facebook,
    Linkedin,
    Twitch,
    Spotify,
    Soundcloud,
    Pinterest,
    Snapchat,
    Patreon,
    Behance,
    Dribbble,
    Medium,
    Hashnode,
    Devto,
    Website,
    Custom,
}

impl Platform {
    /// Strict parse of a lowercase platform name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "github" => Some(Self::Github),
            "instagram" => Some(Self::Instagram),
            "youtube" => Some(Self::Youtube),
            "reddit" => Some(Self::Reddit),
            "discord" => Some(Self::Discord),
            "x" => Some(Self::X),
            "twitter" => Some(Self::Twitter),
            "tiktok" => Some(Self::Tiktok),
            "facebook" => Some(Self::Facebook),
            "linkedin" => Some(Self::Linkedin),
            "twitch" => Some(Self::Twitch),
            "spotify" => Some(Self::Spotify),
            "soundcloud" => Some(Self::Soundcloud),
            "pinterest" => Some(Self::Pinterest),
            "snapchat" => Some(Self::Snapchat),
            "patreon" => Some(Self::Patreon),
            "behance" => Some(Self::Behance),
            "dribbble" => Some(Self::Dribbble),
            "medium" => Some(Self::Medium),
            "hashnode" => Some(Self::Hashnode),
            "devto" => Some(Self::Devto),
            "website" => Some(Self::Website),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Normalize a client-supplied platform (case-insensitive); unknown
    /// platforms silently map to `custom`.
    pub fn normalize(s: &str) -> Self {
        Self::parse(&s.to_lowercase()).unwrap_or(Self::Custom)
    }

    /// Category the platform belongs to. Everything on the allow-list except
    /// `website` and `custom` is a social platform.
    pub fn link_type(self) -> LinkType {
        match self {
            Self::Website => LinkType::Website,
            Self::Custom => LinkType::Custom,
            _ => LinkType::Social,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Instagram => "instagram",
            Self::Youtube => "youtube",
            Self::Reddit => "reddit",
            Self::Discord => "discord",
            Self::X => "x",
            Self::Twitter => "twitter",
            Self::Tiktok => "tiktok",
            Self::Facebook => "facebook",
            Self::Linkedin => "linkedin",
            Self::Twitch => "twitch",
            Self::Spotify => "spotify",
            Self::Soundcloud => "soundcloud",
            Self::Pinterest => "pinterest",
            Self::Snapchat => "snapchat",
            Self::Patreon => "patreon",
            Self::Behance => "behance",
            Self::Dribbble => "dribbble",
            Self::Medium => "medium",
            Self::Hashnode => "hashnode",
            Self::Devto => "devto",
            Self::Website => "website",
            Self::Custom => "custom",
        }
    }
}

/// Maximum length of a link title.
pub const LINK_TITLE_MAX: usize = 100;
