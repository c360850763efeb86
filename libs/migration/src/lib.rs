pub use sea_orm_migration::prelude::*;

mod m20250815_000000_create_items;
mod m20250815_000001_create_points;
mod m20250815_000002_create_point_items;
mod m20250815_000003_seed_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250815_000000_create_items::Migration),
            Box::new(m20250815_000001_create_points::Migration),
            Box::new(m20250815_000002_create_point_items::Migration),
            Box::new(m20250815_000003_seed_items::Migration),
        ]
    }
}
