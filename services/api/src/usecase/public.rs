use vanta_domain::ident::validate_username;

use crate::domain::repository::{
    AccountRepository, BadgeRepository, ConnectionRepository, LinkRepository, MediaRepository,
    SteamPort,
};
use crate::domain::types::{
    Badge, DiscordConnectionData, FeaturedGame, Link, MediaItem, Provider, SteamConnectionData,
    SteamPlayer, User,
};
use crate::error::ApiError;

/// Route names that can never be usernames; a lookup for one of these is a
/// plain 404 without touching the database.
pub const RESERVED_USERNAMES: &[&str] =
    &["api", "login", "register", "dashboard", "auth", "profile"];

/// The public directory lists at most this many newest profiles.
pub const PUBLIC_DIRECTORY_LIMIT: u64 = 50;

fn is_reserved(username: &str) -> bool {
    RESERVED_USERNAMES.contains(&username)
}

/// Steam block of a public profile: the stored mirror plus a best-effort
/// live player summary.
#[derive(Debug)]
pub struct PublicSteamInfo {
    pub persona_name: Option<String>,
    pub avatar_url: Option<String>,
    pub featured_game: Option<FeaturedGame>,
    pub live: Option<SteamPlayer>,
}

/// Public projection of a profile. Private account fields are dropped at the
/// handler layer; this carries everything a public page renders.
#[derive(Debug)]
pub struct PublicProfile {
    pub user: User,
    pub links: Vec<Link>,
    pub media: Vec<MediaItem>,
    pub badges: Vec<Badge>,
    pub discord: Option<DiscordConnectionData>,
    pub steam: Option<PublicSteamInfo>,
}

// ── GetPublicProfile ─────────────────────────────────────────────────────────

pub struct GetPublicProfileUseCase<A, L, M, B, C, S>
where
    A: AccountRepository,
    L: LinkRepository,
    M: MediaRepository,
    B: BadgeRepository,
    C: ConnectionRepository,
    S: SteamPort,
{
    pub accounts: A,
    pub links: L,
    pub media: M,
    pub badges: B,
    pub connections: C,
    pub steam: S,
}

impl<A, L, M, B, C, S> GetPublicProfileUseCase<A, L, M, B, C, S>
where
    A: AccountRepository,
    L: LinkRepository,
    M: MediaRepository,
    B: BadgeRepository,
    C: ConnectionRepository,
    S: SteamPort,
{
    pub async fn execute(&self, raw_username: &str) -> Result<PublicProfile, ApiError> {
        let username = raw_username.trim_start_matches('@').trim().to_lowercase();
        if is_reserved(&username) {
            return Err(ApiError::UserNotFound);
        }
        let user = self
            .accounts
            .find_by_username(&username)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        let links = self.links.list(user.id).await?;
        let media = self.media.list(user.id).await?;
        let badges = self.badges.list(user.id).await?;

        let mut discord = None;
        let mut steam = None;
        for connection in self.connections.list(user.id).await? {
            match connection.provider {
                Provider::Discord => {
                    discord =
                        serde_json::from_value::<DiscordConnectionData>(connection.payload).ok();
                }
                Provider::Steam => {
                    let data =
                        serde_json::from_value::<SteamConnectionData>(connection.payload.clone())
                            .unwrap_or_default();
                    // Live status is decoration; the page renders without it.
                    let live = match self.steam.fetch_player(&connection.external_id).await {
                        Ok(player) => player,
                        Err(_) => None,
                    };
                    steam = Some(PublicSteamInfo {
                        persona_name: data.persona_name,
                        avatar_url: data.avatar_url,
                        featured_game: data.featured_game,
                        live,
                    });
                }
            }
        }

        Ok(PublicProfile {
            user,
            links,
            media,
            badges,
            discord,
            steam,
        })
    }
}

// ── CheckUsername ────────────────────────────────────────────────────────────

pub struct UsernameCheck {
    pub valid: bool,
    pub available: bool,
}

pub struct CheckUsernameUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> CheckUsernameUseCase<A> {
    pub async fn execute(&self, raw_username: &str) -> Result<UsernameCheck, ApiError> {
        let username = raw_username.trim().to_lowercase();
        if !validate_username(&username) || is_reserved(&username) {
            return Ok(UsernameCheck {
                valid: false,
                available: false,
            });
        }
        let taken = self.accounts.username_exists(&username).await?;
        Ok(UsernameCheck {
            valid: true,
            available: !taken,
        })
    }
}

// ── ListPublicUsers ──────────────────────────────────────────────────────────

pub struct ListPublicUsersUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> ListPublicUsersUseCase<A> {
    pub async fn execute(&self) -> Result<Vec<User>, ApiError> {
        self.accounts.list_newest(PUBLIC_DIRECTORY_LIMIT).await
    }
}
