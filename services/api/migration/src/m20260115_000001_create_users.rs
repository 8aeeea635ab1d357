use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Users::DisplayName).string().null())
                    .col(ColumnDef::new(Users::Bio).text().null())
                    .col(ColumnDef::new(Users::Avatar).string().null())
                    .col(ColumnDef::new(Users::BannerImage).string().null())
                    .col(
                        ColumnDef::new(Users::Theme)
                            .string()
                            .not_null()
                            .default("dark"),
                    )
                    .col(
                        ColumnDef::new(Users::BackgroundEffect)
                            .string()
                            .not_null()
                            .default("none"),
                    )
                    .col(ColumnDef::new(Users::BackgroundVideo).string().null())
                    .col(ColumnDef::new(Users::BackgroundAudio).string().null())
                    .col(ColumnDef::new(Users::BackgroundAudioDesktop).string().null())
                    .col(ColumnDef::new(Users::BackgroundAudioMobile).string().null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    DisplayName,
    Bio,
    Avatar,
    BannerImage,
    Theme,
    BackgroundEffect,
    BackgroundVideo,
    BackgroundAudio,
    BackgroundAudioDesktop,
    BackgroundAudioMobile,
    CreatedAt,
    UpdatedAt,
}
