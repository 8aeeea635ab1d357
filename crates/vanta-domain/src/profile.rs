//! Presentation enums.
//!
//! All of these follow the same permissive policy: an out-of-range value sent
//! by a client is silently normalized to the default instead of rejected.
//! That behavior is a contract of the update endpoints, so `normalize` is the
//! only lossy constructor; `parse` is strict and returns `None`.

use serde::{Deserialize, Serialize};

/// Profile color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Neon,
    Gradient,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            "neon" => Some(Self::Neon),
            "gradient" => Some(Self::Gradient),
            _ => None,
        }
    }

    /// Normalize a client-supplied value, falling back to `dark`.
    pub fn normalize(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Neon => "neon",
            Self::Gradient => "gradient",
        }
    }
}

/// Decorative background effect rendered behind the public profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundEffect {
    #[default]
    None,
    FallingStars,
    FloatingBubbles,
    BlackHole,
    Video,
}

impl BackgroundEffect {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "falling-stars" => Some(Self::FallingStars),
            "floating-bubbles" => Some(Self::FloatingBubbles),
            "black-hole" => Some(Self::BlackHole),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    /// Normalize a client-supplied value, falling back to `none`.
    pub fn normalize(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::FallingStars => "falling-stars",
            Self::FloatingBubbles => "floating-bubbles",
            Self::BlackHole => "black-hole",
            Self::Video => "video",
        }
    }
}

/// Device class a background audio track targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Desktop,
    Mobile,
    /// Fallback track played when no device-specific one is set.
    #[default]
    Generic,
}

impl DeviceClass {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "desktop" => Some(Self::Desktop),
            "mobile" => Some(Self::Mobile),
            "generic" => Some(Self::Generic),
            _ => None,
        }
    }

    /// Normalize a client-supplied value, falling back to `generic`.
    pub fn normalize(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

/// Maximum length of a display name.
pub const DISPLAY_NAME_MAX: usize = 50;
/// Maximum length of a bio.
pub const BIO_MAX: usize = 500;

/// Truncate a string to `max` characters (not bytes).
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
