use sea_orm_migration::prelude::*;

mod m20260115_000001_create_users;
mod m20260115_000002_create_links;
mod m20260115_000003_create_media_items;
mod m20260115_000004_create_badges;
mod m20260115_000005_create_connections;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_users::Migration),
            Box::new(m20260115_000002_create_links::Migration),
            Box::new(m20260115_000003_create_media_items::Migration),
            Box::new(m20260115_000004_create_badges::Migration),
            Box::new(m20260115_000005_create_connections::Migration),
        ]
    }
}
