//! Migrator registering entity migrations in foreign-key dependency order.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_store;
mod m20240301_000002_create_section;
mod m20240301_000003_create_product;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_store::Migration),
            Box::new(m20240301_000002_create_section::Migration),
            Box::new(m20240301_000003_create_product::Migration),
        ]
    }
}
