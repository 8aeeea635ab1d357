use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    sea_query::OnConflict,
};
use uuid::Uuid;

use vanta_api_schema::{badges, connections, links, media_items, users};
use vanta_domain::badge::BadgeSource;
use vanta_domain::link::{LinkType, Platform};
use vanta_domain::media::MediaType;
use vanta_domain::profile::{BackgroundEffect, Theme};
use vanta_domain::user::UserRole;

use crate::domain::repository::{
    AccountRepository, BadgeRepository, ConnectionRepository, LinkRepository, MediaRepository,
};
use crate::domain::types::{
    Badge, Connection, Link, MediaItem, PresentationPatch, Provider, User,
};
use crate::error::ApiError;

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn username_exists(&self, username: &str) -> Result<bool, ApiError> {
        let count = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .count(&self.db)
            .await
            .context("count users by username")?;
        Ok(count > 0)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, ApiError> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.db)
            .await
            .context("count users by email")?;
        Ok(count > 0)
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.as_u8() as i16),
            display_name: Set(user.display_name.clone()),
            bio: Set(user.bio.clone()),
            avatar: Set(user.avatar.clone()),
            banner_image: Set(user.banner_image.clone()),
            theme: Set(user.theme.as_str().to_owned()),
            background_effect: Set(user.background_effect.as_str().to_owned()),
            background_video: Set(user.background_video.clone()),
            background_audio: Set(user.background_audio.clone()),
            background_audio_desktop: Set(user.background_audio_desktop.clone()),
            background_audio_mobile: Set(user.background_audio_mobile.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn update_presentation(
        &self,
        id: Uuid,
        patch: &PresentationPatch,
    ) -> Result<(), ApiError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref v) = patch.display_name {
            am.display_name = Set((!v.is_empty()).then(|| v.clone()));
        }
        if let Some(ref v) = patch.bio {
            am.bio = Set((!v.is_empty()).then(|| v.clone()));
        }
        if let Some(theme) = patch.theme {
            am.theme = Set(theme.as_str().to_owned());
        }
        if let Some(effect) = patch.background_effect {
            am.background_effect = Set(effect.as_str().to_owned());
        }
        if let Some(ref v) = patch.avatar {
            am.avatar = Set(v.clone());
        }
        if let Some(ref v) = patch.banner_image {
            am.banner_image = Set(v.clone());
        }
        if let Some(ref v) = patch.background_video {
            am.background_video = Set(v.clone());
        }
        if let Some(ref v) = patch.background_audio {
            am.background_audio = Set(v.clone());
        }
        if let Some(ref v) = patch.background_audio_desktop {
            am.background_audio_desktop = Set(v.clone());
        }
        if let Some(ref v) = patch.background_audio_mobile {
            am.background_audio_mobile = Set(v.clone());
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update presentation")?;
        Ok(())
    }

    async fn update_email(&self, id: Uuid, email: &str) -> Result<(), ApiError> {
        let am = users::ActiveModel {
            id: Set(id),
            email: Set(email.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        am.update(&self.db).await.context("update email")?;
        Ok(())
    }

    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> Result<(), ApiError> {
        let am = users::ActiveModel {
            id: Set(id),
            password_hash: Set(password_hash.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        am.update(&self.db).await.context("update password hash")?;
        Ok(())
    }

    async fn list_newest(&self, limit: u64) -> Result<Vec<User>, ApiError> {
        let models = users::Entity::find()
            .order_by_desc(users::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list newest users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        role: UserRole::from_u8(model.role as u8).unwrap_or(UserRole::User),
        display_name: model.display_name,
        bio: model.bio,
        avatar: model.avatar,
        banner_image: model.banner_image,
        theme: Theme::normalize(&model.theme),
        background_effect: BackgroundEffect::normalize(&model.background_effect),
        background_video: model.background_video,
        background_audio: model.background_audio,
        background_audio_desktop: model.background_audio_desktop,
        background_audio_mobile: model.background_audio_mobile,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Link repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLinkRepository {
    pub db: DatabaseConnection,
}

impl LinkRepository for DbLinkRepository {
    async fn list(&self, user_id: Uuid) -> Result<Vec<Link>, ApiError> {
        let models = links::Entity::find()
            .filter(links::Column::UserId.eq(user_id))
            .order_by_asc(links::Column::Position)
            .all(&self.db)
            .await
            .context("list links")?;
        Ok(models.into_iter().map(link_from_model).collect())
    }

    async fn create(&self, link: &Link) -> Result<(), ApiError> {
        links::ActiveModel {
            id: Set(link.id),
            user_id: Set(link.user_id),
            title: Set(link.title.clone()),
            url: Set(link.url.clone()),
            link_type: Set(link.link_type.as_str().to_owned()),
            platform: Set(link.platform.as_str().to_owned()),
            position: Set(link.position),
            created_at: Set(link.created_at),
        }
        .insert(&self.db)
        .await
        .context("create link")?;
        Ok(())
    }

    async fn next_position(&self, user_id: Uuid) -> Result<i32, ApiError> {
        let last = links::Entity::find()
            .filter(links::Column::UserId.eq(user_id))
            .order_by_desc(links::Column::Position)
            .one(&self.db)
            .await
            .context("find last link position")?;
        Ok(last.map(|m| m.position + 1).unwrap_or(0))
    }

    async fn delete_by_id(&self, user_id: Uuid, id: Uuid) -> Result<bool, ApiError> {
        let result = links::Entity::delete_many()
            .filter(links::Column::UserId.eq(user_id))
            .filter(links::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete link by id")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_index(&self, user_id: Uuid, index: usize) -> Result<bool, ApiError> {
        let nth = links::Entity::find()
            .filter(links::Column::UserId.eq(user_id))
            .order_by_asc(links::Column::Position)
            .offset(index as u64)
            .limit(1)
            .one(&self.db)
            .await
            .context("find link by index")?;
        match nth {
            Some(model) => self.delete_by_id(user_id, model.id).await,
            None => Ok(false),
        }
    }
}

fn link_from_model(model: links::Model) -> Link {
    let platform = Platform::normalize(&model.platform);
    Link {
        id: model.id,
        user_id: model.user_id,
        title: model.title,
        url: model.url,
        link_type: LinkType::parse(&model.link_type).unwrap_or(platform.link_type()),
        platform,
        position: model.position,
        created_at: model.created_at,
    }
}

// ── Media repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMediaRepository {
    pub db: DatabaseConnection,
}

impl MediaRepository for DbMediaRepository {
    async fn list(&self, user_id: Uuid) -> Result<Vec<MediaItem>, ApiError> {
        let models = media_items::Entity::find()
            .filter(media_items::Column::UserId.eq(user_id))
            .order_by_asc(media_items::Column::Position)
            .all(&self.db)
            .await
            .context("list media items")?;
        Ok(models.into_iter().map(media_from_model).collect())
    }

    async fn create(&self, item: &MediaItem) -> Result<(), ApiError> {
        media_items::ActiveModel {
            id: Set(item.id),
            user_id: Set(item.user_id),
            media_type: Set(item.media_type.as_str().to_owned()),
            title: Set(item.title.clone()),
            description: Set(item.description.clone()),
            url: Set(item.url.clone()),
            position: Set(item.position),
            created_at: Set(item.created_at),
        }
        .insert(&self.db)
        .await
        .context("create media item")?;
        Ok(())
    }

    async fn next_position(&self, user_id: Uuid) -> Result<i32, ApiError> {
        let last = media_items::Entity::find()
            .filter(media_items::Column::UserId.eq(user_id))
            .order_by_desc(media_items::Column::Position)
            .one(&self.db)
            .await
            .context("find last media position")?;
        Ok(last.map(|m| m.position + 1).unwrap_or(0))
    }

    async fn delete_by_id(&self, user_id: Uuid, id: Uuid) -> Result<bool, ApiError> {
        let result = media_items::Entity::delete_many()
            .filter(media_items::Column::UserId.eq(user_id))
            .filter(media_items::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete media item by id")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_index(&self, user_id: Uuid, index: usize) -> Result<bool, ApiError> {
        let nth = media_items::Entity::find()
            .filter(media_items::Column::UserId.eq(user_id))
            .order_by_asc(media_items::Column::Position)
            .offset(index as u64)
            .limit(1)
            .one(&self.db)
            .await
            .context("find media item by index")?;
        match nth {
            Some(model) => self.delete_by_id(user_id, model.id).await,
            None => Ok(false),
        }
    }
}

fn media_from_model(model: media_items::Model) -> MediaItem {
    MediaItem {
        id: model.id,
        user_id: model.user_id,
        media_type: MediaType::normalize(&model.media_type),
        title: model.title,
        description: model.description,
        url: model.url,
        position: model.position,
        created_at: model.created_at,
    }
}

// ── Badge repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBadgeRepository {
    pub db: DatabaseConnection,
}

impl BadgeRepository for DbBadgeRepository {
    async fn list(&self, user_id: Uuid) -> Result<Vec<Badge>, ApiError> {
        let models = badges::Entity::find()
            .filter(badges::Column::UserId.eq(user_id))
            .order_by_asc(badges::Column::AwardedAt)
            .all(&self.db)
            .await
            .context("list badges")?;
        Ok(models.into_iter().map(badge_from_model).collect())
    }

    async fn exists(&self, user_id: Uuid, code: &str) -> Result<bool, ApiError> {
        let count = badges::Entity::find()
            .filter(badges::Column::UserId.eq(user_id))
            .filter(badges::Column::Code.eq(code))
            .count(&self.db)
            .await
            .context("count badges by code")?;
        Ok(count > 0)
    }

    async fn create(&self, badge: &Badge) -> Result<(), ApiError> {
        badge_active_model(badge)
            .insert(&self.db)
            .await
            .context("create badge")?;
        Ok(())
    }

    async fn delete_by_code(&self, user_id: Uuid, code: &str) -> Result<bool, ApiError> {
        let result = badges::Entity::delete_many()
            .filter(badges::Column::UserId.eq(user_id))
            .filter(badges::Column::Code.eq(code))
            .exec(&self.db)
            .await
            .context("delete badge by code")?;
        Ok(result.rows_affected > 0)
    }

    async fn replace_by_source(
        &self,
        user_id: Uuid,
        source: BadgeSource,
        badges_set: &[Badge],
    ) -> Result<(), ApiError> {
        let models: Vec<badges::ActiveModel> =
            badges_set.iter().map(badge_active_model).collect();
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    badges::Entity::delete_many()
                        .filter(badges::Column::UserId.eq(user_id))
                        .filter(badges::Column::Source.eq(source.as_str()))
                        .exec(txn)
                        .await?;
                    // A code already held under another source wins; the
                    // synced copy is dropped.
                    badges::Entity::insert_many(models)
                        .on_conflict(
                            OnConflict::columns([badges::Column::UserId, badges::Column::Code])
                                .do_nothing()
                                .to_owned(),
                        )
                        .on_empty_do_nothing()
                        .exec(txn)
                        .await?;
                    Ok(())
                })
            })
            .await
            .context("replace badges by source")?;
        Ok(())
    }
}

fn badge_active_model(badge: &Badge) -> badges::ActiveModel {
    badges::ActiveModel {
        id: Set(badge.id),
        user_id: Set(badge.user_id),
        code: Set(badge.code.clone()),
        name: Set(badge.name.clone()),
        icon_url: Set(badge.icon_url.clone()),
        description: Set(badge.description.clone()),
        source: Set(badge.source.as_str().to_owned()),
        awarded_at: Set(badge.awarded_at),
    }
}

fn badge_from_model(model: badges::Model) -> Badge {
    Badge {
        id: model.id,
        user_id: model.user_id,
        code: model.code,
        name: model.name,
        icon_url: model.icon_url,
        description: model.description,
        source: BadgeSource::parse(&model.source).unwrap_or_default(),
        awarded_at: model.awarded_at,
    }
}

// ── Connection repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbConnectionRepository {
    pub db: DatabaseConnection,
}

impl ConnectionRepository for DbConnectionRepository {
    async fn find(
        &self,
        user_id: Uuid,
        provider: Provider,
    ) -> Result<Option<Connection>, ApiError> {
        let model = connections::Entity::find_by_id((user_id, provider.as_str().to_owned()))
            .one(&self.db)
            .await
            .context("find connection")?;
        Ok(model.and_then(connection_from_model))
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<Connection>, ApiError> {
        let models = connections::Entity::find()
            .filter(connections::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .context("list connections")?;
        Ok(models.into_iter().filter_map(connection_from_model).collect())
    }

    async fn find_by_external_id(
        &self,
        provider: Provider,
        external_id: &str,
    ) -> Result<Option<Connection>, ApiError> {
        let model = connections::Entity::find()
            .filter(connections::Column::Provider.eq(provider.as_str()))
            .filter(connections::Column::ExternalId.eq(external_id))
            .one(&self.db)
            .await
            .context("find connection by external id")?;
        Ok(model.and_then(connection_from_model))
    }

    async fn upsert(&self, connection: &Connection) -> Result<(), ApiError> {
        let am = connections::ActiveModel {
            user_id: Set(connection.user_id),
            provider: Set(connection.provider.as_str().to_owned()),
            external_id: Set(connection.external_id.clone()),
            display_name: Set(connection.display_name.clone()),
            payload: Set(connection.payload.clone()),
            created_at: Set(connection.created_at),
            updated_at: Set(Utc::now()),
        };
        connections::Entity::insert(am)
            .on_conflict(
                OnConflict::columns([
                    connections::Column::UserId,
                    connections::Column::Provider,
                ])
                .update_columns([
                    connections::Column::ExternalId,
                    connections::Column::DisplayName,
                    connections::Column::Payload,
                    connections::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec(&self.db)
            .await
            .context("upsert connection")?;
        Ok(())
    }

    async fn delete(&self, user_id: Uuid, provider: Provider) -> Result<bool, ApiError> {
        let result = connections::Entity::delete_many()
            .filter(connections::Column::UserId.eq(user_id))
            .filter(connections::Column::Provider.eq(provider.as_str()))
            .exec(&self.db)
            .await
            .context("delete connection")?;
        Ok(result.rows_affected > 0)
    }
}

// Rows with a provider this build does not know are skipped, not surfaced.
fn connection_from_model(model: connections::Model) -> Option<Connection> {
    let provider = Provider::parse(&model.provider)?;
    Some(Connection {
        user_id: model.user_id,
        provider,
        external_id: model.external_id,
        display_name: model.display_name,
        payload: model.payload,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
