#![cfg(test)]
use configs::{sqlite_url_for, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// A migrated SQLite database in its own temp directory.
/// The directory (and file) go away when this is dropped.
pub struct TestDb {
    pub db: DatabaseConnection,
    _dir: TempDir,
}

pub async fn get_db() -> Result<TestDb, anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let cfg = DatabaseConfig {
        url: sqlite_url_for(&dir.path().join("service_test.db")),
        ..Default::default()
    };
    let db = models::db::connect_and_migrate(&cfg).await?;
    Ok(TestDb { db, _dir: dir })
}
