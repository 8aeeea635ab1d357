use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, patch, post, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use vanta_core::health::{healthz, readyz};
use vanta_core::middleware::request_id_layer;

use crate::handlers::{
    admin::{edit_user, get_user, grant_badge, revoke_badge},
    auth::{discord_auth_url, discord_login, get_me, login, register},
    connections::{
        clear_featured_game, connect_discord, connect_steam, disconnect_discord, disconnect_steam,
        set_featured_game, steam_auth_url, steam_games,
    },
    profile::{
        add_link, add_media, delete_avatar, delete_background_audio, delete_background_video,
        delete_banner, delete_link, delete_media, get_dashboard, update_email, update_password,
        update_profile, upload_avatar, upload_background_audio, upload_background_video,
        upload_banner,
    },
    public::{check_username, get_profile, list_users},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = match state.config.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(get_me))
        .route("/api/auth/discord/url", get(discord_auth_url))
        .route("/api/auth/discord", post(discord_login))
        // Profile
        .route("/api/profile", get(get_dashboard))
        .route("/api/profile", put(update_profile))
        .route("/api/profile/avatar", post(upload_avatar))
        .route("/api/profile/avatar", delete(delete_avatar))
        .route("/api/profile/banner", post(upload_banner))
        .route("/api/profile/banner", delete(delete_banner))
        .route("/api/profile/background-video", post(upload_background_video))
        .route("/api/profile/background-video", delete(delete_background_video))
        .route("/api/profile/background-audio", post(upload_background_audio))
        .route("/api/profile/background-audio", delete(delete_background_audio))
        .route("/api/profile/links", post(add_link))
        .route("/api/profile/links/{entry}", delete(delete_link))
        .route("/api/profile/media", post(add_media))
        .route("/api/profile/media/{entry}", delete(delete_media))
        .route("/api/profile/email", put(update_email))
        .route("/api/profile/password", put(update_password))
        // Connections
        .route("/api/connections/discord", post(connect_discord))
        .route("/api/connections/discord", delete(disconnect_discord))
        .route("/api/connections/steam/url", get(steam_auth_url))
        .route("/api/connections/steam", post(connect_steam))
        .route("/api/connections/steam", delete(disconnect_steam))
        .route("/api/connections/steam/games", get(steam_games))
        .route("/api/connections/steam/featured-game", put(set_featured_game))
        .route("/api/connections/steam/featured-game", delete(clear_featured_game))
        // Public
        .route("/api/public/users", get(list_users))
        .route("/api/public/users/{username}", get(get_profile))
        .route("/api/public/check-username/{username}", get(check_username))
        // Admin
        .route("/api/admin/users/{id}", get(get_user))
        .route("/api/admin/users/{id}", patch(edit_user))
        .route("/api/admin/users/{id}/badges", post(grant_badge))
        .route("/api/admin/users/{id}/badges/{code}", delete(revoke_badge))
        // Uploaded files
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .layer(cors)
        .with_state(state)
}
