use sea_orm::entity::prelude::*;

/// One row per account: credentials plus the presentation half of the
/// profile aggregate. Links, media, badges, and connections hang off this
/// row via child tables.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: i16,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub banner_image: Option<String>,
    pub theme: String,
    pub background_effect: String,
    pub background_video: Option<String>,
    pub background_audio: Option<String>,
    pub background_audio_desktop: Option<String>,
    pub background_audio_mobile: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::links::Entity")]
    Links,
    #[sea_orm(has_many = "super::media_items::Entity")]
    MediaItems,
    #[sea_orm(has_many = "super::badges::Entity")]
    Badges,
    #[sea_orm(has_many = "super::connections::Entity")]
    Connections,
}

impl Related<super::links::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Links.def()
    }
}

impl Related<super::media_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaItems.def()
    }
}

impl Related<super::badges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Badges.def()
    }
}

impl Related<super::connections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Connections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
