use serde::Deserialize;

use crate::domain::repository::SteamPort;
use crate::domain::types::{SteamGame, SteamPlayer};
use crate::error::ApiError;

const PLAYER_SUMMARIES_URL: &str =
    "https://api.steampowered.com/ISteamUser/GetPlayerSummaries/v2/";
const OWNED_GAMES_URL: &str = "https://api.steampowered.com/IPlayerService/GetOwnedGames/v1/";

/// Steam Web API client. `api_key` is optional; without it the player
/// summary lookups degrade to `None` and the games endpoint reports the
/// integration as unconfigured.
#[derive(Clone)]
pub struct SteamClient {
    pub http: reqwest::Client,
    pub api_key: Option<String>,
}

#[derive(Deserialize)]
struct SummariesEnvelope {
    response: SummariesBody,
}

#[derive(Deserialize)]
struct SummariesBody {
    #[serde(default)]
    players: Vec<PlayerEntry>,
}

#[derive(Deserialize)]
struct PlayerEntry {
    steamid: String,
    personaname: String,
    avatarfull: Option<String>,
    profileurl: Option<String>,
    #[serde(default)]
    personastate: u8,
    gameextrainfo: Option<String>,
}

#[derive(Deserialize)]
struct GamesEnvelope {
    response: GamesBody,
}

#[derive(Deserialize)]
struct GamesBody {
    #[serde(default)]
    games: Vec<GameEntry>,
}

#[derive(Deserialize)]
struct GameEntry {
    appid: u32,
    name: Option<String>,
    #[serde(default)]
    playtime_forever: u32,
    img_icon_url: Option<String>,
}

impl SteamPort for SteamClient {
    async fn fetch_player(&self, steam_id: &str) -> Result<Option<SteamPlayer>, ApiError> {
        let Some(key) = self.api_key.as_deref() else {
            return Ok(None);
        };
        let result = self
            .http
            .get(PLAYER_SUMMARIES_URL)
            .query(&[("key", key), ("steamids", steam_id)])
            .send()
            .await;
        let resp = match result {
            Ok(resp) if resp.status().is_success() => resp,
            Ok(resp) => {
                tracing::warn!(status = %resp.status(), "steam player summary lookup failed");
                return Ok(None);
            }
            Err(e) => {
                tracing::warn!(error = %e, "steam player summary lookup failed");
                return Ok(None);
            }
        };
        let envelope: SummariesEnvelope = match resp.json().await {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(error = %e, "steam player summary decode failed");
                return Ok(None);
            }
        };
        Ok(envelope
            .response
            .players
            .into_iter()
            .next()
            .map(|p| SteamPlayer {
                steam_id: p.steamid,
                persona_name: p.personaname,
                avatar_url: p.avatarfull,
                profile_url: p.profileurl,
                persona_state: p.personastate,
                game_extra_info: p.gameextrainfo,
            }))
    }

    async fn fetch_owned_games(&self, steam_id: &str) -> Result<Vec<SteamGame>, ApiError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(ApiError::OAuthNotConfigured);
        };
        let resp = self
            .http
            .get(OWNED_GAMES_URL)
            .query(&[
                ("key", key),
                ("steamid", steam_id),
                ("include_appinfo", "1"),
                ("include_played_free_games", "1"),
            ])
            .send()
            .await
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("steam owned games request: {e}")))?;
        if !resp.status().is_success() {
            return Err(ApiError::Internal(anyhow::anyhow!(
                "steam owned games returned {}",
                resp.status()
            )));
        }
        let envelope: GamesEnvelope = resp
            .json()
            .await
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("steam owned games decode: {e}")))?;
        Ok(envelope
            .response
            .games
            .into_iter()
            .map(|g| {
                let icon = g.img_icon_url.filter(|hash| !hash.is_empty()).map(|hash| {
                    format!(
                        "https://media.steampowered.com/steamcommunity/public/images/apps/{}/{hash}.jpg",
                        g.appid
                    )
                });
                SteamGame {
                    app_id: g.appid,
                    name: g.name.unwrap_or_else(|| format!("App {}", g.appid)),
                    playtime_forever: g.playtime_forever,
                    img_icon_url: icon,
                }
            })
            .collect())
    }
}
