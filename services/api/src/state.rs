use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use vanta_auth_types::identity::JwtSecret;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::infra::db::{
    DbAccountRepository, DbBadgeRepository, DbConnectionRepository, DbLinkRepository,
    DbMediaRepository,
};
use crate::infra::discord::DiscordClient;
use crate::infra::steam::SteamClient;
use crate::infra::uploads::LocalFileStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<ApiConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn link_repo(&self) -> DbLinkRepository {
        DbLinkRepository {
            db: self.db.clone(),
        }
    }

    pub fn media_repo(&self) -> DbMediaRepository {
        DbMediaRepository {
            db: self.db.clone(),
        }
    }

    pub fn badge_repo(&self) -> DbBadgeRepository {
        DbBadgeRepository {
            db: self.db.clone(),
        }
    }

    pub fn connection_repo(&self) -> DbConnectionRepository {
        DbConnectionRepository {
            db: self.db.clone(),
        }
    }

    pub fn discord_client(&self) -> Result<DiscordClient, ApiError> {
        let config = self
            .config
            .discord
            .clone()
            .ok_or(ApiError::OAuthNotConfigured)?;
        Ok(DiscordClient {
            http: self.http.clone(),
            config,
        })
    }

    pub fn steam_client(&self) -> SteamClient {
        SteamClient {
            http: self.http.clone(),
            api_key: self.config.steam_api_key.clone(),
        }
    }

    pub fn file_store(&self) -> LocalFileStore {
        LocalFileStore {
            root: PathBuf::from(&self.config.upload_dir),
        }
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        JwtSecret(state.config.jwt_secret.clone())
    }
}
