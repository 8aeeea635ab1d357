use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Connections::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Connections::UserId).uuid().not_null())
                    .col(ColumnDef::new(Connections::Provider).string().not_null())
                    .col(ColumnDef::new(Connections::ExternalId).string().not_null())
                    .col(ColumnDef::new(Connections::DisplayName).string().null())
                    .col(ColumnDef::new(Connections::Payload).json_binary().not_null())
                    .col(
                        ColumnDef::new(Connections::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Connections::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(Connections::UserId)
                            .col(Connections::Provider),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Connections::Table, Connections::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Connections::Table)
                    .col(Connections::Provider)
                    .col(Connections::ExternalId)
                    .unique()
                    .name("idx_connections_provider_external_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Connections::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Connections {
    Table,
    UserId,
    Provider,
    ExternalId,
    DisplayName,
    Payload,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
