use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MediaItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MediaItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MediaItems::UserId).uuid().not_null())
                    .col(ColumnDef::new(MediaItems::MediaType).string().not_null())
                    .col(ColumnDef::new(MediaItems::Title).string().not_null())
                    .col(ColumnDef::new(MediaItems::Description).text().not_null())
                    .col(ColumnDef::new(MediaItems::Url).string().not_null())
                    .col(ColumnDef::new(MediaItems::Position).integer().not_null())
                    .col(
                        ColumnDef::new(MediaItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MediaItems::Table, MediaItems::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(MediaItems::Table)
                    .col(MediaItems::UserId)
                    .name("idx_media_items_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MediaItems {
    Table,
    Id,
    UserId,
    MediaType,
    Title,
    Description,
    Url,
    Position,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
