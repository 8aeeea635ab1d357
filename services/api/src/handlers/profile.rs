use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use vanta_auth_types::identity::Identity;
use vanta_domain::entry_ref::EntryRef;
use vanta_domain::profile::DeviceClass;

use crate::error::ApiError;
use crate::handlers::{
    BadgeResponse, LinkResponse, MediaResponse, UserResponse, read_upload,
};
use crate::state::AppState;
use crate::usecase::account::{ChangeEmailUseCase, ChangePasswordUseCase};
use crate::usecase::profile::{
    AddLinkInput, AddLinkUseCase, AddMediaInput, AddMediaUseCase, GetDashboardUseCase,
    ProfileImageKind, RemoveBackgroundAudioUseCase, RemoveBackgroundVideoUseCase,
    RemoveLinkUseCase, RemoveMediaUseCase, RemoveProfileImageUseCase, SetBackgroundAudioUseCase,
    SetBackgroundVideoUseCase, SetProfileImageUseCase, UpdatePresentationInput,
    UpdatePresentationUseCase,
};

// ── GET /api/profile ─────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionSummaryResponse {
    pub provider: String,
    pub external_id: String,
    pub display_name: Option<String>,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub user: UserResponse,
    pub links: Vec<LinkResponse>,
    pub media: Vec<MediaResponse>,
    pub badges: Vec<BadgeResponse>,
    pub connections: Vec<ConnectionSummaryResponse>,
}

pub async fn get_dashboard(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let usecase = GetDashboardUseCase {
        accounts: state.account_repo(),
        links: state.link_repo(),
        media: state.media_repo(),
        badges: state.badge_repo(),
        connections: state.connection_repo(),
    };
    let output = usecase.execute(identity.user_id).await?;
    Ok(Json(DashboardResponse {
        user: UserResponse::from_user(output.user),
        links: output.links.into_iter().map(LinkResponse::from_link).collect(),
        media: output.media.into_iter().map(MediaResponse::from_item).collect(),
        badges: output
            .badges
            .into_iter()
            .map(BadgeResponse::from_badge)
            .collect(),
        connections: output
            .connections
            .into_iter()
            .map(|c| ConnectionSummaryResponse {
                provider: c.provider.as_str().to_owned(),
                external_id: c.external_id,
                display_name: c.display_name,
            })
            .collect(),
    }))
}

// ── PUT /api/profile ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub theme: Option<String>,
    pub background_effect: Option<String>,
}

pub async fn update_profile(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = UpdatePresentationUseCase {
        repo: state.account_repo(),
    };
    let user = usecase
        .execute(
            identity.user_id,
            UpdatePresentationInput {
                display_name: body.display_name,
                bio: body.bio,
                theme: body.theme,
                background_effect: body.background_effect,
            },
        )
        .await?;
    Ok(Json(UserResponse::from_user(user)))
}

// ── Profile images ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UploadResponse {
    pub url: String,
}

async fn set_profile_image(
    identity: Identity,
    state: AppState,
    kind: ProfileImageKind,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let (filename, bytes) = read_upload(&mut multipart).await?;
    let usecase = SetProfileImageUseCase {
        repo: state.account_repo(),
        files: state.file_store(),
    };
    let url = usecase
        .execute(identity.user_id, kind, &filename, &bytes)
        .await?;
    Ok(Json(UploadResponse { url }))
}

pub async fn upload_avatar(
    identity: Identity,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    set_profile_image(identity, state, ProfileImageKind::Avatar, multipart).await
}

pub async fn upload_banner(
    identity: Identity,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    set_profile_image(identity, state, ProfileImageKind::Banner, multipart).await
}

async fn remove_profile_image(
    identity: Identity,
    state: AppState,
    kind: ProfileImageKind,
) -> Result<StatusCode, ApiError> {
    let usecase = RemoveProfileImageUseCase {
        repo: state.account_repo(),
    };
    usecase.execute(identity.user_id, kind).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_avatar(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    remove_profile_image(identity, state, ProfileImageKind::Avatar).await
}

pub async fn delete_banner(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    remove_profile_image(identity, state, ProfileImageKind::Banner).await
}

// ── Background video ─────────────────────────────────────────────────────────

pub async fn upload_background_video(
    identity: Identity,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let (filename, bytes) = read_upload(&mut multipart).await?;
    let usecase = SetBackgroundVideoUseCase {
        repo: state.account_repo(),
        files: state.file_store(),
    };
    let url = usecase
        .execute(identity.user_id, &filename, &bytes)
        .await?;
    Ok(Json(UploadResponse { url }))
}

pub async fn delete_background_video(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let usecase = RemoveBackgroundVideoUseCase {
        repo: state.account_repo(),
    };
    usecase.execute(identity.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Background audio ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AudioQuery {
    pub device: Option<String>,
}

pub async fn upload_background_audio(
    identity: Identity,
    State(state): State<AppState>,
    Query(query): Query<AudioQuery>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let device = DeviceClass::normalize(query.device.as_deref().unwrap_or(""));
    let (filename, bytes) = read_upload(&mut multipart).await?;
    let usecase = SetBackgroundAudioUseCase {
        repo: state.account_repo(),
        files: state.file_store(),
    };
    let url = usecase
        .execute(identity.user_id, device, &filename, &bytes)
        .await?;
    Ok(Json(UploadResponse { url }))
}

pub async fn delete_background_audio(
    identity: Identity,
    State(state): State<AppState>,
    Query(query): Query<AudioQuery>,
) -> Result<StatusCode, ApiError> {
    let device = DeviceClass::normalize(query.device.as_deref().unwrap_or(""));
    let usecase = RemoveBackgroundAudioUseCase {
        repo: state.account_repo(),
    };
    usecase.execute(identity.user_id, device).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Links ────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddLinkRequest {
    pub title: String,
    pub url: String,
    pub platform: Option<String>,
}

pub async fn add_link(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<AddLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), ApiError> {
    let usecase = AddLinkUseCase {
        links: state.link_repo(),
    };
    let link = usecase
        .execute(
            identity.user_id,
            AddLinkInput {
                title: body.title,
                url: body.url,
                platform: body.platform,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(LinkResponse::from_link(link))))
}

pub async fn delete_link(
    identity: Identity,
    State(state): State<AppState>,
    Path(entry): Path<String>,
) -> Result<StatusCode, ApiError> {
    let entry: EntryRef = entry.parse().map_err(|_| ApiError::MissingData)?;
    let usecase = RemoveLinkUseCase {
        links: state.link_repo(),
    };
    usecase.execute(identity.user_id, entry).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Media ────────────────────────────────────────────────────────────────────

pub async fn add_media(
    identity: Identity,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<MediaResponse>), ApiError> {
    let mut media_type = None;
    let mut title = None;
    let mut description = None;
    let mut filename = None;
    let mut bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::MissingData)?
    {
        if field.file_name().is_some() {
            filename = Some(field.file_name().unwrap_or_default().to_owned());
            bytes = Some(
                field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::MissingData)?
                    .to_vec(),
            );
            continue;
        }
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("mediaType") | Some("media_type") => media_type = field.text().await.ok(),
            Some("title") => title = field.text().await.ok(),
            Some("description") => description = field.text().await.ok(),
            _ => {}
        }
    }

    let (filename, bytes) = match (filename, bytes) {
        (Some(filename), Some(bytes)) => (filename, bytes),
        _ => return Err(ApiError::MissingData),
    };

    let usecase = AddMediaUseCase {
        media: state.media_repo(),
        files: state.file_store(),
    };
    let item = usecase
        .execute(
            identity.user_id,
            AddMediaInput {
                media_type,
                title,
                description,
                filename,
                bytes,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(MediaResponse::from_item(item))))
}

pub async fn delete_media(
    identity: Identity,
    State(state): State<AppState>,
    Path(entry): Path<String>,
) -> Result<StatusCode, ApiError> {
    let entry: EntryRef = entry.parse().map_err(|_| ApiError::MissingData)?;
    let usecase = RemoveMediaUseCase {
        media: state.media_repo(),
    };
    usecase.execute(identity.user_id, entry).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PUT /api/profile/email ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateEmailRequest {
    pub email: String,
    pub password: String,
}

pub async fn update_email(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdateEmailRequest>,
) -> Result<StatusCode, ApiError> {
    let usecase = ChangeEmailUseCase {
        repo: state.account_repo(),
    };
    usecase
        .execute(identity.user_id, &body.email, &body.password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PUT /api/profile/password ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

pub async fn update_password(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdatePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    let usecase = ChangePasswordUseCase {
        repo: state.account_repo(),
    };
    usecase
        .execute(identity.user_id, &body.current_password, &body.new_password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
