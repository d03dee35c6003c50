use sea_orm::DatabaseConnection;

/// Per-process handles shared by every handler via axum `State`.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}
