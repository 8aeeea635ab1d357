use serde::Deserialize;

use crate::config::DiscordConfig;
use crate::domain::repository::DiscordPort;
use crate::domain::types::DiscordUser;
use crate::error::ApiError;

const TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const ME_URL: &str = "https://discord.com/api/users/@me";

/// Discord OAuth + user API client.
#[derive(Clone)]
pub struct DiscordClient {
    pub http: reqwest::Client,
    pub config: DiscordConfig,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct MeResponse {
    id: String,
    username: String,
    email: Option<String>,
    avatar: Option<String>,
    public_flags: Option<u64>,
    premium_type: Option<u8>,
}

impl DiscordPort for DiscordClient {
    /// Any upstream rejection surfaces as `OAuthExchangeFailed`; the client
    /// retries the whole OAuth dance, so there is nothing finer to report.
    async fn exchange_code(&self, code: &str) -> Result<String, ApiError> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];
        let resp = self
            .http
            .post(TOKEN_URL)
            .form(&params)
            .send()
            .await
            .map_err(|_| ApiError::OAuthExchangeFailed)?;
        if !resp.status().is_success() {
            return Err(ApiError::OAuthExchangeFailed);
        }
        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|_| ApiError::OAuthExchangeFailed)?;
        Ok(token.access_token)
    }

    async fn fetch_user(&self, access_token: &str) -> Result<DiscordUser, ApiError> {
        let resp = self
            .http
            .get(ME_URL)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|_| ApiError::OAuthExchangeFailed)?;
        if !resp.status().is_success() {
            return Err(ApiError::OAuthExchangeFailed);
        }
        let me: MeResponse = resp
            .json()
            .await
            .map_err(|_| ApiError::OAuthExchangeFailed)?;

        // Store a full CDN URL so the frontend renders without knowing the
        // Discord avatar hash scheme.
        let avatar = me
            .avatar
            .map(|hash| format!("https://cdn.discordapp.com/avatars/{}/{hash}.png", me.id));

        Ok(DiscordUser {
            id: me.id,
            username: me.username,
            email: me.email,
            avatar,
            public_flags: me.public_flags.unwrap_or(0),
            premium_type: me.premium_type.unwrap_or(0),
        })
    }
}
