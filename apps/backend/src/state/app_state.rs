use sea_orm::DatabaseConnection;

/// Application state shared by every worker.
///
/// The store handle is injected here once at startup; handlers never reach
/// for a global connection.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Database connection (absent in handler-only tests)
    db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// State without a store; every store-backed route answers 500.
    pub fn without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
