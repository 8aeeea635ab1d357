use uuid::Uuid;

use vanta_domain::profile::{BIO_MAX, DISPLAY_NAME_MAX, Theme, truncate_chars};

use crate::domain::repository::{AccountRepository, BadgeRepository};
use crate::domain::types::{Badge, PresentationPatch, User};
use crate::error::ApiError;

// ── FindUser ─────────────────────────────────────────────────────────────────

pub struct FindUserUseCase<A: AccountRepository, B: BadgeRepository> {
    pub accounts: A,
    pub badges: B,
}

impl<A: AccountRepository, B: BadgeRepository> FindUserUseCase<A, B> {
    /// Look up an account by ID or username. A query that parses as a UUID is
    /// an ID lookup; anything else is matched against usernames.
    pub async fn execute(&self, query: &str) -> Result<(User, Vec<Badge>), ApiError> {
        let query = query.trim();
        let user = match query.parse::<Uuid>() {
            Ok(id) => self.accounts.find_by_id(id).await?,
            Err(_) => {
                self.accounts
                    .find_by_username(&query.to_lowercase())
                    .await?
            }
        }
        .ok_or(ApiError::UserNotFound)?;
        let badges = self.badges.list(user.id).await?;
        Ok((user, badges))
    }
}

// ── EditPresentation ─────────────────────────────────────────────────────────

/// Moderation subset of the presentation fields.
#[derive(Default)]
pub struct AdminEditInput {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub theme: Option<String>,
}

pub struct AdminEditPresentationUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> AdminEditPresentationUseCase<A> {
    pub async fn execute(&self, user_id: Uuid, input: AdminEditInput) -> Result<User, ApiError> {
        if self.accounts.find_by_id(user_id).await?.is_none() {
            return Err(ApiError::UserNotFound);
        }
        let patch = PresentationPatch {
            display_name: input
                .display_name
                .map(|v| truncate_chars(v.trim(), DISPLAY_NAME_MAX)),
            bio: input.bio.map(|v| truncate_chars(&v, BIO_MAX)),
            theme: input.theme.as_deref().map(Theme::normalize),
            ..Default::default()
        };
        if patch.is_empty() {
            return Err(ApiError::MissingData);
        }
        self.accounts.update_presentation(user_id, &patch).await?;
        self.accounts
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}
