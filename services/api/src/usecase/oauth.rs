use anyhow::Context as _;
use chrono::Utc;
use rand::distr::{Alphanumeric, SampleString};
use uuid::Uuid;

use vanta_auth_types::token::issue_token;
use vanta_core::password::hash_password;
use vanta_domain::badge::BadgeSource;
use vanta_domain::ident::{sanitize_username_base, suffixed_username};
use vanta_domain::user::UserRole;

use crate::config::DiscordConfig;
use crate::domain::repository::{
    AccountRepository, BadgeRepository, ConnectionRepository, DiscordPort, SteamPort,
};
use crate::domain::types::{
    Connection, DiscordConnectionData, DiscordUser, FeaturedGame, Provider, SteamConnectionData,
    SteamGame, User,
};
use crate::error::ApiError;
use crate::usecase::account::{AuthOutput, new_user};
use crate::usecase::badge::badges_from_discord;

/// Authorization URL the frontend redirects to for Discord login/connect.
pub fn discord_authorize_url(config: &DiscordConfig) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("client_id", &config.client_id)
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("response_type", "code")
        .append_pair("scope", "identify email")
        .finish();
    format!("https://discord.com/api/oauth2/authorize?{query}")
}

/// OpenID 2.0 checkid_setup URL the frontend redirects to for Steam connect.
/// Steam redirects back to `{frontend}/connect/steam` with the claimed_id in
/// the query string.
pub fn steam_openid_url(frontend_url: &str) -> String {
    let realm = frontend_url.trim_end_matches('/');
    let return_to = format!("{realm}/connect/steam");
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("openid.ns", "http://specs.openid.net/auth/2.0")
        .append_pair("openid.mode", "checkid_setup")
        .append_pair("openid.return_to", &return_to)
        .append_pair("openid.realm", realm)
        .append_pair(
            "openid.identity",
            "http://specs.openid.net/auth/2.0/identifier_select",
        )
        .append_pair(
            "openid.claimed_id",
            "http://specs.openid.net/auth/2.0/identifier_select",
        )
        .finish();
    format!("https://steamcommunity.com/openid/login?{query}")
}

/// Extract the numeric Steam ID from an OpenID claimed_id URL.
///
/// Only the `https://steamcommunity.com/openid/id/<digits>` shape is
/// accepted; anything else is treated as a failed verification.
pub fn parse_steam_claimed_id(claimed_id: &str) -> Option<String> {
    let rest = claimed_id
        .strip_prefix("https://steamcommunity.com/openid/id/")
        .or_else(|| claimed_id.strip_prefix("http://steamcommunity.com/openid/id/"))?;
    let rest = rest.trim_end_matches('/');
    if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
        Some(rest.to_owned())
    } else {
        None
    }
}

fn discord_payload(discord: &DiscordUser) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(DiscordConnectionData {
        username: discord.username.clone(),
        avatar: discord.avatar.clone(),
        public_flags: discord.public_flags,
    })
    .context("serialize discord connection payload")
    .map_err(ApiError::from)
}

fn discord_connection(user_id: Uuid, discord: &DiscordUser) -> Result<Connection, ApiError> {
    let now = Utc::now();
    Ok(Connection {
        user_id,
        provider: Provider::Discord,
        external_id: discord.id.clone(),
        display_name: Some(discord.username.clone()),
        payload: discord_payload(discord)?,
        created_at: now,
        updated_at: now,
    })
}

// ── DiscordLogin ─────────────────────────────────────────────────────────────

pub struct DiscordLoginUseCase<A, C, B, D>
where
    A: AccountRepository,
    C: ConnectionRepository,
    B: BadgeRepository,
    D: DiscordPort,
{
    pub accounts: A,
    pub connections: C,
    pub badges: B,
    pub discord: D,
    pub admin_emails: Vec<String>,
    pub jwt_secret: String,
}

impl<A, C, B, D> DiscordLoginUseCase<A, C, B, D>
where
    A: AccountRepository,
    C: ConnectionRepository,
    B: BadgeRepository,
    D: DiscordPort,
{
    /// Log in (or sign up) with a Discord authorization code.
    ///
    /// Resolution order: existing connection by Discord ID, then existing
    /// account by the Discord-provided email, then a brand-new account. The
    /// connection mirror and the Discord-sourced badge set are refreshed on
    /// every login.
    pub async fn execute(&self, code: &str) -> Result<AuthOutput, ApiError> {
        let access_token = self.discord.exchange_code(code).await?;
        let discord_user = self.discord.fetch_user(&access_token).await?;

        let user = match self
            .connections
            .find_by_external_id(Provider::Discord, &discord_user.id)
            .await?
        {
            Some(connection) => self
                .accounts
                .find_by_id(connection.user_id)
                .await?
                .ok_or_else(|| {
                    ApiError::Internal(anyhow::anyhow!("connection references a deleted user"))
                })?,
            None => {
                let by_email = match discord_user.email.as_deref() {
                    Some(email) => self.accounts.find_by_email(&email.to_lowercase()).await?,
                    None => None,
                };
                match by_email {
                    Some(user) => user,
                    None => self.create_account(&discord_user).await?,
                }
            }
        };

        self.connections
            .upsert(&discord_connection(user.id, &discord_user)?)
            .await?;
        self.badges
            .replace_by_source(
                user.id,
                BadgeSource::Discord,
                &badges_from_discord(user.id, &discord_user),
            )
            .await?;

        let token = issue_token(user.id, &user.username, user.role.as_u8(), &self.jwt_secret)?;
        Ok(AuthOutput { user, token })
    }

    async fn create_account(&self, discord_user: &DiscordUser) -> Result<User, ApiError> {
        let base = sanitize_username_base(&discord_user.username);
        let mut username = base.clone();
        let mut n = 1u32;
        while self.accounts.username_exists(&username).await? {
            username = suffixed_username(&base, n);
            n += 1;
        }

        let email = match discord_user.email.as_deref() {
            Some(email) => email.to_lowercase(),
            // No email scope granted; a synthetic address keeps the column
            // unique without claiming a real domain.
            None => format!("{}@discord.invalid", discord_user.id),
        };
        let role = if self.admin_emails.contains(&email) {
            UserRole::Admin
        } else {
            UserRole::User
        };

        // Password login stays possible only after a reset; the placeholder
        // is random and never disclosed.
        let placeholder = Alphanumeric.sample_string(&mut rand::rng(), 32);
        let password_hash = hash_password(&placeholder)?;

        let user = new_user(username, email, password_hash, role);
        self.accounts.create(&user).await?;
        Ok(user)
    }
}

// ── DiscordConnect ───────────────────────────────────────────────────────────

pub struct DiscordConnectUseCase<C, B, D>
where
    C: ConnectionRepository,
    B: BadgeRepository,
    D: DiscordPort,
{
    pub connections: C,
    pub badges: B,
    pub discord: D,
}

impl<C, B, D> DiscordConnectUseCase<C, B, D>
where
    C: ConnectionRepository,
    B: BadgeRepository,
    D: DiscordPort,
{
    /// Link a Discord account to an existing, authenticated user.
    pub async fn execute(&self, user_id: Uuid, code: &str) -> Result<Connection, ApiError> {
        let access_token = self.discord.exchange_code(code).await?;
        let discord_user = self.discord.fetch_user(&access_token).await?;

        if let Some(existing) = self
            .connections
            .find_by_external_id(Provider::Discord, &discord_user.id)
            .await?
        {
            if existing.user_id != user_id {
                return Err(ApiError::ConnectionAlreadyLinked);
            }
        }

        let connection = discord_connection(user_id, &discord_user)?;
        self.connections.upsert(&connection).await?;
        self.badges
            .replace_by_source(
                user_id,
                BadgeSource::Discord,
                &badges_from_discord(user_id, &discord_user),
            )
            .await?;
        Ok(connection)
    }
}

// ── DisconnectProvider ───────────────────────────────────────────────────────

pub struct DisconnectProviderUseCase<C, B>
where
    C: ConnectionRepository,
    B: BadgeRepository,
{
    pub connections: C,
    pub badges: B,
}

impl<C, B> DisconnectProviderUseCase<C, B>
where
    C: ConnectionRepository,
    B: BadgeRepository,
{
    /// Remove a provider link. Disconnecting Discord also clears the
    /// Discord-sourced badges, which are meaningless without the link.
    pub async fn execute(&self, user_id: Uuid, provider: Provider) -> Result<(), ApiError> {
        if !self.connections.delete(user_id, provider).await? {
            return Err(ApiError::ConnectionNotFound);
        }
        if provider == Provider::Discord {
            self.badges
                .replace_by_source(user_id, BadgeSource::Discord, &[])
                .await?;
        }
        Ok(())
    }
}

// ── SteamConnect ─────────────────────────────────────────────────────────────

pub struct SteamConnectUseCase<C, S>
where
    C: ConnectionRepository,
    S: SteamPort,
{
    pub connections: C,
    pub steam: S,
}

impl<C, S> SteamConnectUseCase<C, S>
where
    C: ConnectionRepository,
    S: SteamPort,
{
    /// Link a Steam account from an OpenID claimed_id. Persona enrichment is
    /// best-effort; the link succeeds even when the Steam API is unavailable.
    pub async fn execute(&self, user_id: Uuid, claimed_id: &str) -> Result<Connection, ApiError> {
        let steam_id =
            parse_steam_claimed_id(claimed_id).ok_or(ApiError::OAuthExchangeFailed)?;

        if let Some(existing) = self
            .connections
            .find_by_external_id(Provider::Steam, &steam_id)
            .await?
        {
            if existing.user_id != user_id {
                return Err(ApiError::ConnectionAlreadyLinked);
            }
        }

        // Re-linking the same Steam account keeps the featured game.
        let featured_game = match self.connections.find(user_id, Provider::Steam).await? {
            Some(prev) if prev.external_id == steam_id => {
                serde_json::from_value::<SteamConnectionData>(prev.payload)
                    .ok()
                    .and_then(|data| data.featured_game)
            }
            _ => None,
        };

        let player = self.steam.fetch_player(&steam_id).await?;
        let payload = serde_json::to_value(SteamConnectionData {
            persona_name: player.as_ref().map(|p| p.persona_name.clone()),
            avatar_url: player.as_ref().and_then(|p| p.avatar_url.clone()),
            featured_game,
        })
        .context("serialize steam connection payload")
        .map_err(ApiError::from)?;

        let now = Utc::now();
        let connection = Connection {
            user_id,
            provider: Provider::Steam,
            external_id: steam_id,
            display_name: player.map(|p| p.persona_name),
            payload,
            created_at: now,
            updated_at: now,
        };
        self.connections.upsert(&connection).await?;
        Ok(connection)
    }
}

// ── SteamGames ───────────────────────────────────────────────────────────────

pub struct SteamGamesUseCase<C, S>
where
    C: ConnectionRepository,
    S: SteamPort,
{
    pub connections: C,
    pub steam: S,
}

impl<C, S> SteamGamesUseCase<C, S>
where
    C: ConnectionRepository,
    S: SteamPort,
{
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<SteamGame>, ApiError> {
        let connection = self
            .connections
            .find(user_id, Provider::Steam)
            .await?
            .ok_or(ApiError::ConnectionNotFound)?;
        self.steam.fetch_owned_games(&connection.external_id).await
    }
}

// ── SetFeaturedGame ──────────────────────────────────────────────────────────

pub struct SetFeaturedGameUseCase<C: ConnectionRepository> {
    pub connections: C,
}

impl<C: ConnectionRepository> SetFeaturedGameUseCase<C> {
    /// Pin (or clear, with `None`) a game on the public profile.
    pub async fn execute(
        &self,
        user_id: Uuid,
        game: Option<FeaturedGame>,
    ) -> Result<(), ApiError> {
        let mut connection = self
            .connections
            .find(user_id, Provider::Steam)
            .await?
            .ok_or(ApiError::ConnectionNotFound)?;

        let mut data = serde_json::from_value::<SteamConnectionData>(connection.payload.clone())
            .unwrap_or_default();
        data.featured_game = game;
        connection.payload = serde_json::to_value(data)
            .context("serialize steam connection payload")
            .map_err(ApiError::from)?;
        connection.updated_at = Utc::now();

        self.connections.upsert(&connection).await
    }
}
