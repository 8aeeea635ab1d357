/// Discord OAuth application credentials. Absent when the deployment has no
/// Discord integration configured; the related endpoints then return
/// `OAUTH_NOT_CONFIGURED`.
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Redirect URI registered with the Discord application.
    pub redirect_uri: String,
}

/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing JWT bearer tokens.
    pub jwt_secret: String,
    /// TCP port to listen on (default 5000). Env var: `API_PORT`.
    pub api_port: u16,
    /// Emails that register as admin accounts. Env var: `ADMIN_EMAILS` (comma-separated).
    pub admin_emails: Vec<String>,
    /// Directory uploaded files are written to (default "uploads"). Env var: `UPLOAD_DIR`.
    pub upload_dir: String,
    /// Frontend origin allowed by CORS (default "http://localhost:3000"). Env var: `FRONTEND_URL`.
    pub frontend_url: String,
    /// Discord OAuth credentials. Env vars: `DISCORD_CLIENT_ID`,
    /// `DISCORD_CLIENT_SECRET`, `DISCORD_REDIRECT_URI` (all three required together).
    pub discord: Option<DiscordConfig>,
    /// Steam Web API key. Env var: `STEAM_API_KEY`.
    pub steam_api_key: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let discord = match (
            std::env::var("DISCORD_CLIENT_ID").ok(),
            std::env::var("DISCORD_CLIENT_SECRET").ok(),
            std::env::var("DISCORD_REDIRECT_URI").ok(),
        ) {
            (Some(client_id), Some(client_secret), Some(redirect_uri)) => Some(DiscordConfig {
                client_id,
                client_secret,
                redirect_uri,
            }),
            _ => None,
        };

        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            admin_emails: std::env::var("ADMIN_EMAILS")
                .ok()
                .map(|v| {
                    v.split(',')
                        .map(|e| e.trim().to_lowercase())
                        .filter(|e| !e.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_owned()),
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_owned()),
            discord,
            steam_api_key: std::env::var("STEAM_API_KEY").ok(),
        }
    }
}
