/// Users API routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use roster_storage::users::{self, NewUser, User, UserUpdate};

/// Parse a path segment as a user id, rejecting non-integers with a 400
fn parse_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|_| {
        tracing::warn!(id = raw, "Invalid user id in request path");
        ServerError::BadRequest("Invalid user ID".to_string())
    })
}

/// Unwrap a JSON body extraction, mapping rejections to a 400
fn require_json<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::warn!("Invalid JSON body: {}", rejection.body_text());
            Err(ServerError::BadRequest(rejection.body_text()))
        }
    }
}

/// GET /api/v1/users
/// Get all users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let all = users::get_all(&app_state.pool).await?;

    tracing::debug!(count = all.len(), "Fetched users");
    Ok(Json(all))
}

/// GET /api/v1/users/:id
/// Get a single user by id
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;

    let user = users::get_by_id(&app_state.pool, id)
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_string()))?;

    tracing::debug!(id, email = %user.email, "Fetched user");
    Ok(Json(user))
}

/// POST /api/v1/users
/// Create a new user
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let new_user = require_json(payload)?;

    let user = users::create(&app_state.pool, new_user).await?;

    tracing::info!(id = user.id, email = %user.email, name = %user.name, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/v1/users/:id
/// Merge the supplied fields onto an existing user
pub async fn update_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UserUpdate>, JsonRejection>,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;
    let changes = require_json(payload)?;

    let user = users::update(&app_state.pool, id, changes)
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_string()))?;

    tracing::info!(id, email = %user.email, "User updated");
    Ok(Json(user))
}

/// DELETE /api/v1/users/:id
/// Delete a user
pub async fn delete_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    let id = parse_id(&id)?;

    let deleted = users::delete(&app_state.pool, id).await?;
    if !deleted {
        return Err(ServerError::NotFound("User not found".to_string()));
    }

    tracing::info!(id, "User deleted");
    Ok(Json(serde_json::json!({
        "message": "User deleted successfully"
    })))
}
