pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_station_table;
mod m20251101_000002_create_commuter_table;
mod m20251101_000003_create_review_table;
mod m20251101_000004_create_aspect_rating_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_station_table::Migration),
            Box::new(m20251101_000002_create_commuter_table::Migration),
            Box::new(m20251101_000003_create_review_table::Migration),
            Box::new(m20251101_000004_create_aspect_rating_table::Migration),
        ]
    }
}
