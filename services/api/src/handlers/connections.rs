use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use vanta_auth_types::identity::Identity;

use crate::domain::types::{Connection, FeaturedGame, Provider, SteamGame};
use crate::error::ApiError;
use crate::handlers::auth::OAuthCodeRequest;
use crate::state::AppState;
use crate::handlers::auth::AuthUrlResponse;
use crate::usecase::oauth::{
    DiscordConnectUseCase, DisconnectProviderUseCase, SetFeaturedGameUseCase, SteamConnectUseCase,
    SteamGamesUseCase, steam_openid_url,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionResponse {
    pub provider: String,
    pub external_id: String,
    pub display_name: Option<String>,
}

impl ConnectionResponse {
    fn from_connection(connection: Connection) -> Self {
        Self {
            provider: connection.provider.as_str().to_owned(),
            external_id: connection.external_id,
            display_name: connection.display_name,
        }
    }
}

// ── POST /api/connections/discord ────────────────────────────────────────────

pub async fn connect_discord(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<OAuthCodeRequest>,
) -> Result<Json<ConnectionResponse>, ApiError> {
    let usecase = DiscordConnectUseCase {
        connections: state.connection_repo(),
        badges: state.badge_repo(),
        discord: state.discord_client()?,
    };
    let connection = usecase.execute(identity.user_id, &body.code).await?;
    Ok(Json(ConnectionResponse::from_connection(connection)))
}

// ── DELETE /api/connections/discord ──────────────────────────────────────────

pub async fn disconnect_discord(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let usecase = DisconnectProviderUseCase {
        connections: state.connection_repo(),
        badges: state.badge_repo(),
    };
    usecase.execute(identity.user_id, Provider::Discord).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /api/connections/steam/url ───────────────────────────────────────────

pub async fn steam_auth_url(
    _identity: Identity,
    State(state): State<AppState>,
) -> Json<AuthUrlResponse> {
    Json(AuthUrlResponse {
        url: steam_openid_url(&state.config.frontend_url),
    })
}

// ── POST /api/connections/steam ──────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamConnectRequest {
    /// OpenID `claimed_id` URL returned by the Steam login redirect.
    pub claimed_id: String,
}

pub async fn connect_steam(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<SteamConnectRequest>,
) -> Result<Json<ConnectionResponse>, ApiError> {
    let usecase = SteamConnectUseCase {
        connections: state.connection_repo(),
        steam: state.steam_client(),
    };
    let connection = usecase.execute(identity.user_id, &body.claimed_id).await?;
    Ok(Json(ConnectionResponse::from_connection(connection)))
}

// ── DELETE /api/connections/steam ────────────────────────────────────────────

pub async fn disconnect_steam(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let usecase = DisconnectProviderUseCase {
        connections: state.connection_repo(),
        badges: state.badge_repo(),
    };
    usecase.execute(identity.user_id, Provider::Steam).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /api/connections/steam/games ─────────────────────────────────────────

pub async fn steam_games(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<SteamGame>>, ApiError> {
    let usecase = SteamGamesUseCase {
        connections: state.connection_repo(),
        steam: state.steam_client(),
    };
    let games = usecase.execute(identity.user_id).await?;
    Ok(Json(games))
}

// ── PUT /api/connections/steam/featured-game ─────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGameRequest {
    pub app_id: u32,
    pub name: String,
}

pub async fn set_featured_game(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<FeaturedGameRequest>,
) -> Result<StatusCode, ApiError> {
    let usecase = SetFeaturedGameUseCase {
        connections: state.connection_repo(),
    };
    usecase
        .execute(
            identity.user_id,
            Some(FeaturedGame {
                app_id: body.app_id,
                name: body.name,
            }),
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /api/connections/steam/featured-game ──────────────────────────────

pub async fn clear_featured_game(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let usecase = SetFeaturedGameUseCase {
        connections: state.connection_repo(),
    };
    usecase.execute(identity.user_id, None).await?;
    Ok(StatusCode::NO_CONTENT)
}
