/// Router construction
use crate::{api, state::AppState};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router
///
/// Shared by the binary and the integration tests so both run the exact
/// same routing table.
pub fn create_router(app_state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .route("/users/:id", get(api::users::get_user))
        .route("/users/:id", put(api::users::update_user))
        .route("/users/:id", delete(api::users::delete_user));

    Router::new()
        .route("/health", get(api::health::health))
        .nest("/api/v1", user_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
