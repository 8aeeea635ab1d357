use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("username must be 3-20 characters: lowercase letters, digits, '-' or '_'")]
    InvalidUsername,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("password must be at least 6 characters")]
    PasswordTooShort,
    #[error("username already taken")]
    UsernameTaken,
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("forbidden")]
    Forbidden,
    #[error("user not found")]
    UserNotFound,
    #[error("badge already granted")]
    BadgeAlreadyGranted,
    #[error("connection not found")]
    ConnectionNotFound,
    #[error("account already linked to another user")]
    ConnectionAlreadyLinked,
    #[error("invalid url")]
    InvalidUrl,
    #[error("missing data")]
    MissingData,
    #[error("provider exchange failed")]
    OAuthExchangeFailed,
    #[error("provider integration not configured")]
    OAuthNotConfigured,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::PasswordTooShort => "PASSWORD_TOO_SHORT",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::BadgeAlreadyGranted => "BADGE_ALREADY_GRANTED",
            Self::ConnectionNotFound => "CONNECTION_NOT_FOUND",
            Self::ConnectionAlreadyLinked => "CONNECTION_ALREADY_LINKED",
            Self::InvalidUrl => "INVALID_URL",
            Self::MissingData => "MISSING_DATA",
            Self::OAuthExchangeFailed => "OAUTH_EXCHANGE_FAILED",
            Self::OAuthNotConfigured => "OAUTH_NOT_CONFIGURED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Uniqueness conflicts map to 400, not 409. The registration form
        // treats every rejection as field-level validation feedback.
        let status = match &self {
            Self::InvalidUsername
            | Self::InvalidEmail
            | Self::PasswordTooShort
            | Self::UsernameTaken
            | Self::EmailTaken
            | Self::BadgeAlreadyGranted
            | Self::ConnectionAlreadyLinked
            | Self::InvalidUrl
            | Self::MissingData
            | Self::OAuthExchangeFailed => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound | Self::ConnectionNotFound => StatusCode::NOT_FOUND,
            Self::OAuthNotConfigured | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
