use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use anyhow::Result;

use crate::db::{connect_with_config, DatabaseConfig};



/// Transaction handling tests
pub mod transaction_tests;

/// Fresh, migrated in-memory SQLite database.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
