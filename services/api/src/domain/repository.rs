#![allow(async_fn_in_trait)]

use uuid::Uuid;

use vanta_domain::badge::BadgeSource;

use crate::domain::types::{
    Badge, Connection, DiscordUser, Link, MediaItem, PresentationPatch, Provider, SteamGame,
    SteamPlayer, User,
};
use crate::error::ApiError;

/// Repository for accounts and their presentation columns.
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn username_exists(&self, username: &str) -> Result<bool, ApiError>;
    async fn email_exists(&self, email: &str) -> Result<bool, ApiError>;
    async fn create(&self, user: &User) -> Result<(), ApiError>;
    async fn update_presentation(
        &self,
        id: Uuid,
        patch: &PresentationPatch,
    ) -> Result<(), ApiError>;
    async fn update_email(&self, id: Uuid, email: &str) -> Result<(), ApiError>;
    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<(), ApiError>;
    /// Newest accounts first, for the public directory.
    async fn list_newest(&self, limit: u64) -> Result<Vec<User>, ApiError>;
}

/// Repository for profile links, ordered by position.
pub trait LinkRepository: Send + Sync {
    async fn list(&self, user_id: Uuid) -> Result<Vec<Link>, ApiError>;
    async fn create(&self, link: &Link) -> Result<(), ApiError>;
    /// Next free position (max + 1, or 0 for an empty list).
    async fn next_position(&self, user_id: Uuid) -> Result<i32, ApiError>;
    /// Delete by id. Returns `true` if a row was deleted.
    async fn delete_by_id(&self, user_id: Uuid, id: Uuid) -> Result<bool, ApiError>;
    /// Delete the nth link in position order. Returns `true` if a row was deleted.
    async fn delete_by_index(&self, user_id: Uuid, index: usize) -> Result<bool, ApiError>;
}

/// Repository for media gallery items, ordered by position.
pub trait MediaRepository: Send + Sync {
    async fn list(&self, user_id: Uuid) -> Result<Vec<MediaItem>, ApiError>;
    async fn create(&self, item: &MediaItem) -> Result<(), ApiError>;
    async fn next_position(&self, user_id: Uuid) -> Result<i32, ApiError>;
    async fn delete_by_id(&self, user_id: Uuid, id: Uuid) -> Result<bool, ApiError>;
    async fn delete_by_index(&self, user_id: Uuid, index: usize) -> Result<bool, ApiError>;
}

/// Repository for badge grants.
pub trait BadgeRepository: Send + Sync {
    async fn list(&self, user_id: Uuid) -> Result<Vec<Badge>, ApiError>;
    async fn exists(&self, user_id: Uuid, code: &str) -> Result<bool, ApiError>;
    async fn create(&self, badge: &Badge) -> Result<(), ApiError>;
    /// Delete by code. Returns `true` if a row was deleted.
    async fn delete_by_code(&self, user_id: Uuid, code: &str) -> Result<bool, ApiError>;
    /// Atomically replace every badge of the given source with the provided
    /// set. A badge whose code already exists under a different source is
    /// skipped, never overwritten.
    async fn replace_by_source(
        &self,
        user_id: Uuid,
        source: BadgeSource,
        badges: &[Badge],
    ) -> Result<(), ApiError>;
}

/// Repository for third-party account connections.
pub trait ConnectionRepository: Send + Sync {
    async fn find(&self, user_id: Uuid, provider: Provider)
    -> Result<Option<Connection>, ApiError>;
    async fn list(&self, user_id: Uuid) -> Result<Vec<Connection>, ApiError>;
    /// Look up whichever account a given external identity is linked to.
    async fn find_by_external_id(
        &self,
        provider: Provider,
        external_id: &str,
    ) -> Result<Option<Connection>, ApiError>;
    async fn upsert(&self, connection: &Connection) -> Result<(), ApiError>;
    /// Delete a connection. Returns `true` if a row was deleted.
    async fn delete(&self, user_id: Uuid, provider: Provider) -> Result<bool, ApiError>;
}

/// Port for the Discord OAuth and user APIs.
pub trait DiscordPort: Send + Sync {
    /// Exchange an authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> Result<String, ApiError>;
    async fn fetch_user(&self, access_token: &str) -> Result<DiscordUser, ApiError>;
}

/// Port for the Steam Web API. Player summaries are best-effort: a missing
/// API key or an upstream failure yields `Ok(None)` so public profiles can
/// degrade gracefully.
pub trait SteamPort: Send + Sync {
    async fn fetch_player(&self, steam_id: &str) -> Result<Option<SteamPlayer>, ApiError>;
    async fn fetch_owned_games(&self, steam_id: &str) -> Result<Vec<SteamGame>, ApiError>;
}

/// Storage for uploaded files. Returns the public URL path of the stored file.
pub trait FileStore: Send + Sync {
    async fn store(&self, filename_hint: &str, bytes: &[u8]) -> Result<String, ApiError>;
}
