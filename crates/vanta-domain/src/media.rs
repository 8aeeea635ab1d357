//! Media gallery types.

use serde::{Deserialize, Serialize};

/// Kind of a media gallery item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Gif,
    Audio,
}

impl MediaType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "image" => Some(Self::Image),
            "gif" => Some(Self::Gif),
            "audio" => Some(Self::Audio),
            _ => None,
        }
    }

    /// Normalize a client-supplied value, falling back to `image`.
    pub fn normalize(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Gif => "gif",
            Self::Audio => "audio",
        }
    }
}

/// Maximum length of a media title.
pub const MEDIA_TITLE_MAX: usize = 100;
/// Maximum length of a media description.
pub const MEDIA_DESCRIPTION_MAX: usize = 500;
