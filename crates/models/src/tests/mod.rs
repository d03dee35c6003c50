
/// CRUD operations tests for products and orders
pub mod crud_tests;


use configs::{sqlite_url_for, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// Fresh, migrated SQLite file. Keep the `TempDir` alive for the test's duration.
pub(crate) async fn setup_test_db() -> anyhow::Result<(TempDir, DatabaseConnection)> {
    let dir = tempfile::tempdir()?;
    let cfg = DatabaseConfig {
        url: sqlite_url_for(&dir.path().join("models_test.db")),
        ..Default::default()
    };
    let db = crate::db::connect_and_migrate(&cfg).await?;
    Ok((dir, db))
}
