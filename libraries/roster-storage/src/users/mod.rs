//! User entity and CRUD queries

use crate::error::Result;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A stored user record
///
/// The wire representation carries `id`, `name` and `email`; the
/// `created_at`/`updated_at` columns stay inside the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Input for [`create`]; the store assigns the id
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Partial update for [`update`]
///
/// `None` means "leave this field unchanged". Absent and `null` JSON
/// fields both deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Get all users, in insertion (rowid) order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(users)
}

/// Look up a single user by id
pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Insert a new user and return it with the assigned id
pub async fn create(pool: &SqlitePool, new_user: NewUser) -> Result<User> {
    let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
        .bind(&new_user.name)
        .bind(&new_user.email)
        .execute(pool)
        .await?;

    Ok(User {
        id: result.last_insert_rowid(),
        name: new_user.name,
        email: new_user.email,
    })
}

/// Merge the supplied fields onto an existing user
///
/// Fields left as `None` keep their stored value. Returns `None` when no
/// user with this id exists; a missing row is never created.
pub async fn update(pool: &SqlitePool, id: i64, changes: UserUpdate) -> Result<Option<User>> {
    let result = sqlx::query(
        "UPDATE users
         SET name = COALESCE(?, name),
             email = COALESCE(?, email),
             updated_at = datetime('now')
         WHERE id = ?",
    )
    .bind(changes.name.as_deref())
    .bind(changes.email.as_deref())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_by_id(pool, id).await
}

/// Delete a user permanently
///
/// Returns `false` when no user with this id exists.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
