use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Links::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Links::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Links::UserId).uuid().not_null())
                    .col(ColumnDef::new(Links::Title).string().not_null())
                    .col(ColumnDef::new(Links::Url).string().not_null())
                    .col(ColumnDef::new(Links::LinkType).string().not_null())
                    .col(ColumnDef::new(Links::Platform).string().not_null())
                    .col(ColumnDef::new(Links::Position).integer().not_null())
                    .col(
                        ColumnDef::new(Links::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Links::Table, Links::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Links::Table)
                    .col(Links::UserId)
                    .name("idx_links_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Links::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Links {
    Table,
    Id,
    UserId,
    Title,
    Url,
    LinkType,
    Platform,
    Position,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
