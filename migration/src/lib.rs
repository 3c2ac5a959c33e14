pub use sea_orm_migration::prelude::*;

pub mod entities;
mod m20251020_000001_games;
mod m20251020_000002_download_clicks;
mod m20251020_000003_status_checks;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_games::Migration),
            Box::new(m20251020_000002_download_clicks::Migration),
            Box::new(m20251020_000003_status_checks::Migration),
        ]
    }
}
