use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Badges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Badges::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Badges::UserId).uuid().not_null())
                    .col(ColumnDef::new(Badges::Code).string().not_null())
                    .col(ColumnDef::new(Badges::Name).string().not_null())
                    .col(ColumnDef::new(Badges::IconUrl).string().null())
                    .col(ColumnDef::new(Badges::Description).text().null())
                    .col(ColumnDef::new(Badges::Source).string().not_null())
                    .col(
                        ColumnDef::new(Badges::AwardedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Badges::Table, Badges::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Badges::Table)
                    .col(Badges::UserId)
                    .col(Badges::Code)
                    .unique()
                    .name("idx_badges_user_id_code")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Badges::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Badges {
    Table,
    Id,
    UserId,
    Code,
    Name,
    IconUrl,
    Description,
    Source,
    AwardedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
