use chrono::Utc;
use uuid::Uuid;

use vanta_domain::badge::BadgeSource;

use crate::domain::repository::{AccountRepository, BadgeRepository};
use crate::domain::types::{Badge, DiscordUser};
use crate::error::ApiError;

// ── GrantBadge ───────────────────────────────────────────────────────────────

pub struct GrantBadgeInput {
    pub code: String,
    pub name: String,
    pub icon_url: Option<String>,
    pub description: Option<String>,
}

pub struct GrantBadgeUseCase<A: AccountRepository, B: BadgeRepository> {
    pub accounts: A,
    pub badges: B,
}

impl<A: AccountRepository, B: BadgeRepository> GrantBadgeUseCase<A, B> {
    pub async fn execute(&self, user_id: Uuid, input: GrantBadgeInput) -> Result<Badge, ApiError> {
        let code = input.code.trim().to_lowercase();
        if code.is_empty() || input.name.trim().is_empty() {
            return Err(ApiError::MissingData);
        }
        if self.accounts.find_by_id(user_id).await?.is_none() {
            return Err(ApiError::UserNotFound);
        }
        // Codes are unique per user across every source, including
        // provider-synced ones.
        if self.badges.exists(user_id, &code).await? {
            return Err(ApiError::BadgeAlreadyGranted);
        }
        let badge = Badge {
            id: Uuid::now_v7(),
            user_id,
            code,
            name: input.name.trim().to_owned(),
            icon_url: input.icon_url,
            description: input.description,
            source: BadgeSource::Admin,
            awarded_at: Utc::now(),
        };
        self.badges.create(&badge).await?;
        Ok(badge)
    }
}

// ── RevokeBadge ──────────────────────────────────────────────────────────────

pub struct RevokeBadgeUseCase<B: BadgeRepository> {
    pub badges: B,
}

impl<B: BadgeRepository> RevokeBadgeUseCase<B> {
    /// Revoking a badge the user does not hold is a no-op.
    pub async fn execute(&self, user_id: Uuid, code: &str) -> Result<(), ApiError> {
        let code = code.trim().to_lowercase();
        self.badges.delete_by_code(user_id, &code).await?;
        Ok(())
    }
}

// ── Discord badge sync ───────────────────────────────────────────────────────

/// Discord `public_flags` bits mapped to badge (code, name) pairs.
const DISCORD_FLAG_BADGES: &[(u64, &str, &str)] = &[
    (1 << 0, "discord-staff", "Discord Staff"),
    (1 << 1, "discord-partner", "Discord Partner"),
    (1 << 2, "discord-hypesquad", "HypeSquad Events"),
    (1 << 3, "discord-bug-hunter", "Bug Hunter"),
    (1 << 6, "discord-bravery", "HypeSquad Bravery"),
    (1 << 7, "discord-brilliance", "HypeSquad Brilliance"),
    (1 << 8, "discord-balance", "HypeSquad Balance"),
    (1 << 9, "discord-early-supporter", "Early Supporter"),
    (1 << 14, "discord-bug-hunter-gold", "Bug Hunter Gold"),
    (1 << 17, "discord-verified-developer", "Early Verified Bot Developer"),
    (1 << 18, "discord-certified-moderator", "Moderator Programs Alumni"),
    (1 << 22, "discord-active-developer", "Active Developer"),
];

/// Badge code for any active Nitro subscription tier.
const DISCORD_NITRO_CODE: &str = "discord-nitro";

/// Expand a Discord profile into the badge set it entitles.
pub fn badges_from_discord(user_id: Uuid, discord: &DiscordUser) -> Vec<Badge> {
    let now = Utc::now();
    let mut badges: Vec<Badge> = DISCORD_FLAG_BADGES
        .iter()
        .filter(|(bit, _, _)| discord.public_flags & bit != 0)
        .map(|(_, code, name)| Badge {
            id: Uuid::now_v7(),
            user_id,
            code: (*code).to_owned(),
            name: (*name).to_owned(),
            icon_url: None,
            description: None,
            source: BadgeSource::Discord,
            awarded_at: now,
        })
        .collect();
    if discord.premium_type > 0 {
        badges.push(Badge {
            id: Uuid::now_v7(),
            user_id,
            code: DISCORD_NITRO_CODE.to_owned(),
            name: "Discord Nitro".to_owned(),
            icon_url: None,
            description: None,
            source: BadgeSource::Discord,
            awarded_at: now,
        });
    }
    badges
}
