//! Bearer-token identity extractor.

use axum::extract::{FromRef, FromRequestParts};
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use crate::token::validate_token;

/// JWT signing secret, exposed through the application state via `FromRef`
/// so the [`Identity`] extractor can validate tokens in-process.
#[derive(Debug, Clone)]
pub struct JwtSecret(pub String);

/// Caller identity extracted from a validated `Authorization: Bearer` token.
///
/// Returns 401 if the header is absent, not a bearer token, or the token
/// fails validation. Role enforcement (403) is done by handlers after
/// extraction.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
    pub role: u8,
}

impl Identity {
    /// Role wire value 1 = admin (see `vanta_domain::user::UserRole`).
    pub fn is_admin(&self) -> bool {
        self.role >= 1
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let token = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(str::to_owned);

        async move {
            let token = token.ok_or(StatusCode::UNAUTHORIZED)?;
            let info =
                validate_token(&token, &secret.0).map_err(|_| StatusCode::UNAUTHORIZED)?;
            Ok(Self {
                user_id: info.user_id,
                username: info.username,
                role: info.role,
            })
        }
    }
}
