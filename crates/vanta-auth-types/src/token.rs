//! JWT issuance and validation.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access tokens live for 30 days. There is no refresh flow; clients simply
/// log in again when the token expires.
pub const TOKEN_EXP_SECS: u64 = 60 * 60 * 24 * 30;

/// JWT claims payload.
///
/// | Field | JWT claim | Rust type | Meaning |
/// |-------|-----------|-----------|---------|
/// | `sub` | `sub` | UUID string | account ID |
/// | `username` | custom | `String` | canonical lowercase username |
/// | `role` | custom | `u8` wire value | see `vanta_domain::user::UserRole` |
/// | `exp` | `exp` | seconds since epoch | token expiration |
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub username: String,
    pub role: u8,
    pub exp: u64,
}

/// Identity extracted from a validated token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub user_id: Uuid,
    pub username: String,
    pub role: u8,
    pub exp: u64,
}

/// Errors returned by [`validate_token`].
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Issue a signed bearer token for an account.
pub fn issue_token(
    user_id: Uuid,
    username: &str,
    role: u8,
    secret: &str,
) -> anyhow::Result<String> {
    let claims = TokenClaims {
        sub: user_id.to_string(),
        username: username.to_owned(),
        role,
        exp: now_secs() + TOKEN_EXP_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| anyhow::anyhow!("failed to sign token: {e}"))
}

/// Decode and validate a bearer token, returning parsed identity.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
/// Default leeway = 60s, tolerates clock skew.
pub fn validate_token(token: &str, secret: &str) -> Result<TokenInfo, TokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    let claims = data.claims;
    let user_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| TokenError::Malformed)?;

    Ok(TokenInfo {
        user_id,
        username: claims.username,
        role: claims.role,
        exp: claims.exp,
    })
}
