/// Shared application state
use sqlx::SqlitePool;

/// Application state shared across all handlers
///
/// Holds the database pool; handlers receive it by injection so tests can
/// run against an isolated throwaway database.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
