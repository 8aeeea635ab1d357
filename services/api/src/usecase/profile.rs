use chrono::Utc;
use uuid::Uuid;

use vanta_domain::entry_ref::EntryRef;
use vanta_domain::link::{LINK_TITLE_MAX, Platform};
use vanta_domain::media::{MEDIA_DESCRIPTION_MAX, MEDIA_TITLE_MAX, MediaType};
use vanta_domain::profile::{
    BIO_MAX, BackgroundEffect, DISPLAY_NAME_MAX, DeviceClass, Theme, truncate_chars,
};

use crate::domain::repository::{
    AccountRepository, BadgeRepository, ConnectionRepository, FileStore, LinkRepository,
    MediaRepository,
};
use crate::domain::types::{Badge, Connection, Link, MediaItem, PresentationPatch, User};
use crate::error::ApiError;

// ── GetDashboard ─────────────────────────────────────────────────────────────

/// Everything the owner's dashboard renders in one round trip.
pub struct DashboardOutput {
    pub user: User,
    pub links: Vec<Link>,
    pub media: Vec<MediaItem>,
    pub badges: Vec<Badge>,
    pub connections: Vec<Connection>,
}

pub struct GetDashboardUseCase<A, L, M, B, C>
where
    A: AccountRepository,
    L: LinkRepository,
    M: MediaRepository,
    B: BadgeRepository,
    C: ConnectionRepository,
{
    pub accounts: A,
    pub links: L,
    pub media: M,
    pub badges: B,
    pub connections: C,
}

impl<A, L, M, B, C> GetDashboardUseCase<A, L, M, B, C>
where
    A: AccountRepository,
    L: LinkRepository,
    M: MediaRepository,
    B: BadgeRepository,
    C: ConnectionRepository,
{
    pub async fn execute(&self, user_id: Uuid) -> Result<DashboardOutput, ApiError> {
        let user = self
            .accounts
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;
        Ok(DashboardOutput {
            links: self.links.list(user_id).await?,
            media: self.media.list(user_id).await?,
            badges: self.badges.list(user_id).await?,
            connections: self.connections.list(user_id).await?,
            user,
        })
    }
}

// ── UpdatePresentation ───────────────────────────────────────────────────────

/// Raw presentation fields from the client. Enum-valued fields arrive as
/// strings and are normalized permissively: an unknown value becomes the
/// default instead of an error.
#[derive(Default)]
pub struct UpdatePresentationInput {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub theme: Option<String>,
    pub background_effect: Option<String>,
}

pub struct UpdatePresentationUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> UpdatePresentationUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpdatePresentationInput,
    ) -> Result<User, ApiError> {
        let patch = PresentationPatch {
            display_name: input
                .display_name
                .map(|v| truncate_chars(v.trim(), DISPLAY_NAME_MAX)),
            bio: input.bio.map(|v| truncate_chars(&v, BIO_MAX)),
            theme: input.theme.as_deref().map(Theme::normalize),
            background_effect: input
                .background_effect
                .as_deref()
                .map(BackgroundEffect::normalize),
            ..Default::default()
        };
        if patch.is_empty() {
            return Err(ApiError::MissingData);
        }
        self.repo.update_presentation(user_id, &patch).await?;
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

// ── Profile images ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileImageKind {
    Avatar,
    Banner,
}

pub struct SetProfileImageUseCase<R: AccountRepository, F: FileStore> {
    pub repo: R,
    pub files: F,
}

impl<R: AccountRepository, F: FileStore> SetProfileImageUseCase<R, F> {
    /// Stores the uploaded file and points the avatar or banner column at it.
    /// Returns the public URL of the stored file.
    pub async fn execute(
        &self,
        user_id: Uuid,
        kind: ProfileImageKind,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, ApiError> {
        if bytes.is_empty() {
            return Err(ApiError::MissingData);
        }
        let url = self.files.store(filename, bytes).await?;
        let patch = match kind {
            ProfileImageKind::Avatar => PresentationPatch {
                avatar: Some(Some(url.clone())),
                ..Default::default()
            },
            ProfileImageKind::Banner => PresentationPatch {
                banner_image: Some(Some(url.clone())),
                ..Default::default()
            },
        };
        self.repo.update_presentation(user_id, &patch).await?;
        Ok(url)
    }
}

pub struct RemoveProfileImageUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> RemoveProfileImageUseCase<R> {
    pub async fn execute(&self, user_id: Uuid, kind: ProfileImageKind) -> Result<(), ApiError> {
        let patch = match kind {
            ProfileImageKind::Avatar => PresentationPatch {
                avatar: Some(None),
                ..Default::default()
            },
            ProfileImageKind::Banner => PresentationPatch {
                banner_image: Some(None),
                ..Default::default()
            },
        };
        self.repo.update_presentation(user_id, &patch).await
    }
}

// ── Background video ─────────────────────────────────────────────────────────

pub struct SetBackgroundVideoUseCase<R: AccountRepository, F: FileStore> {
    pub repo: R,
    pub files: F,
}

impl<R: AccountRepository, F: FileStore> SetBackgroundVideoUseCase<R, F> {
    /// Uploading a background video switches the effect to `video` in the
    /// same update, so a profile never references a video it is not playing.
    pub async fn execute(
        &self,
        user_id: Uuid,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, ApiError> {
        if bytes.is_empty() {
            return Err(ApiError::MissingData);
        }
        let url = self.files.store(filename, bytes).await?;
        let patch = PresentationPatch {
            background_video: Some(Some(url.clone())),
            background_effect: Some(BackgroundEffect::Video),
            ..Default::default()
        };
        self.repo.update_presentation(user_id, &patch).await?;
        Ok(url)
    }
}

pub struct RemoveBackgroundVideoUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> RemoveBackgroundVideoUseCase<R> {
    /// Clearing the video also resets the effect, which would otherwise
    /// reference a missing file.
    pub async fn execute(&self, user_id: Uuid) -> Result<(), ApiError> {
        let patch = PresentationPatch {
            background_video: Some(None),
            background_effect: Some(BackgroundEffect::None),
            ..Default::default()
        };
        self.repo.update_presentation(user_id, &patch).await
    }
}

// ── Background audio ─────────────────────────────────────────────────────────

fn audio_patch(device: DeviceClass, url: Option<String>) -> PresentationPatch {
    match device {
        DeviceClass::Desktop => PresentationPatch {
            background_audio_desktop: Some(url),
            ..Default::default()
        },
        DeviceClass::Mobile => PresentationPatch {
            background_audio_mobile: Some(url),
            ..Default::default()
        },
        DeviceClass::Generic => PresentationPatch {
            background_audio: Some(url),
            ..Default::default()
        },
    }
}

pub struct SetBackgroundAudioUseCase<R: AccountRepository, F: FileStore> {
    pub repo: R,
    pub files: F,
}

impl<R: AccountRepository, F: FileStore> SetBackgroundAudioUseCase<R, F> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        device: DeviceClass,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, ApiError> {
        if bytes.is_empty() {
            return Err(ApiError::MissingData);
        }
        let url = self.files.store(filename, bytes).await?;
        self.repo
            .update_presentation(user_id, &audio_patch(device, Some(url.clone())))
            .await?;
        Ok(url)
    }
}

pub struct RemoveBackgroundAudioUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> RemoveBackgroundAudioUseCase<R> {
    pub async fn execute(&self, user_id: Uuid, device: DeviceClass) -> Result<(), ApiError> {
        self.repo
            .update_presentation(user_id, &audio_patch(device, None))
            .await
    }
}

// ── Links ────────────────────────────────────────────────────────────────────

pub struct AddLinkInput {
    pub title: String,
    pub url: String,
    pub platform: Option<String>,
}

pub struct AddLinkUseCase<L: LinkRepository> {
    pub links: L,
}

impl<L: LinkRepository> AddLinkUseCase<L> {
    pub async fn execute(&self, user_id: Uuid, input: AddLinkInput) -> Result<Link, ApiError> {
        let title = truncate_chars(input.title.trim(), LINK_TITLE_MAX);
        if title.is_empty() {
            return Err(ApiError::MissingData);
        }
        let parsed = url::Url::parse(input.url.trim()).map_err(|_| ApiError::InvalidUrl)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl);
        }
        let platform = input
            .platform
            .as_deref()
            .map(Platform::normalize)
            .unwrap_or(Platform::Custom);

        let link = Link {
            id: Uuid::now_v7(),
            user_id,
            title,
            url: parsed.to_string(),
            link_type: platform.link_type(),
            platform,
            position: self.links.next_position(user_id).await?,
            created_at: Utc::now(),
        };
        self.links.create(&link).await?;
        Ok(link)
    }
}

pub struct RemoveLinkUseCase<L: LinkRepository> {
    pub links: L,
}

impl<L: LinkRepository> RemoveLinkUseCase<L> {
    /// Removing an unknown id or out-of-range index is a no-op, not an
    /// error; the client may retry a delete that already went through.
    pub async fn execute(&self, user_id: Uuid, entry: EntryRef) -> Result<(), ApiError> {
        match entry {
            EntryRef::ById(id) => self.links.delete_by_id(user_id, id).await?,
            EntryRef::ByIndex(index) => self.links.delete_by_index(user_id, index).await?,
        };
        Ok(())
    }
}

// ── Media ────────────────────────────────────────────────────────────────────

pub struct AddMediaInput {
    pub media_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub struct AddMediaUseCase<M: MediaRepository, F: FileStore> {
    pub media: M,
    pub files: F,
}

impl<M: MediaRepository, F: FileStore> AddMediaUseCase<M, F> {
    pub async fn execute(&self, user_id: Uuid, input: AddMediaInput) -> Result<MediaItem, ApiError> {
        if input.bytes.is_empty() {
            return Err(ApiError::MissingData);
        }
        let url = self.files.store(&input.filename, &input.bytes).await?;
        // A missing title falls back to the original filename.
        let title = match input.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_owned(),
            _ => input.filename.clone(),
        };
        let item = MediaItem {
            id: Uuid::now_v7(),
            user_id,
            media_type: input
                .media_type
                .as_deref()
                .map(MediaType::normalize)
                .unwrap_or_default(),
            title: truncate_chars(&title, MEDIA_TITLE_MAX),
            description: truncate_chars(
                input.description.as_deref().unwrap_or(""),
                MEDIA_DESCRIPTION_MAX,
            ),
            url,
            position: self.media.next_position(user_id).await?,
            created_at: Utc::now(),
        };
        self.media.create(&item).await?;
        Ok(item)
    }
}

pub struct RemoveMediaUseCase<M: MediaRepository> {
    pub media: M,
}

impl<M: MediaRepository> RemoveMediaUseCase<M> {
    /// Same delete tolerance as links: absent entries are a no-op.
    pub async fn execute(&self, user_id: Uuid, entry: EntryRef) -> Result<(), ApiError> {
        match entry {
            EntryRef::ById(id) => self.media.delete_by_id(user_id, id).await?,
            EntryRef::ByIndex(index) => self.media.delete_by_index(user_id, index).await?,
        };
        Ok(())
    }
}
