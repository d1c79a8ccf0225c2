/// Common test utilities and fixtures
use axum::Router;
use roster_server::{create_router, AppState};
use tempfile::TempDir;

/// Build a test app over a fresh throwaway database
///
/// Returns the `TempDir` guard alongside the router; dropping it removes
/// the database file.
pub async fn create_test_app() -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("roster.db").display());

    let pool = roster_storage::create_pool(&url).await.unwrap();
    roster_storage::run_migrations(&pool).await.unwrap();

    let app = create_router(AppState::new(pool));
    (app, dir)
}
