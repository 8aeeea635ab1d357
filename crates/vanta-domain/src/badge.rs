//! Badge provenance.

use serde::{Deserialize, Serialize};

/// Which actor or process created a badge grant.
///
/// Provenance governs resync semantics: provider-sourced badges (`Discord`)
/// are replaced wholesale on every provider re-sync, while badges from other
/// sources are only ever touched individually.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeSource {
    #[default]
    Admin,
    Discord,
    Event,
    System,
}

impl BadgeSource {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "discord" => Some(Self::Discord),
            "event" => Some(Self::Event),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Discord => "discord",
            Self::Event => "event",
            Self::System => "system",
        }
    }
}
