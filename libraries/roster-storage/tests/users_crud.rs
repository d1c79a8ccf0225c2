//! CRUD tests for the users slice against a real on-disk database

use roster_storage::users::{self, NewUser, UserUpdate};
use roster_storage::{create_pool, run_migrations};
use sqlx::SqlitePool;
use tempfile::TempDir;

async fn setup() -> (TempDir, SqlitePool) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("roster.db").display());
    let pool = create_pool(&url).await.unwrap();
    run_migrations(&pool).await.unwrap();
    (dir, pool)
}

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
    }
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let (_dir, pool) = setup().await;
    run_migrations(&pool).await.unwrap();
    run_migrations(&pool).await.unwrap();
}

#[tokio::test]
async fn get_all_on_empty_store_returns_empty_vec() {
    let (_dir, pool) = setup().await;

    let all = users::get_all(&pool).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn create_assigns_id_and_roundtrips() {
    let (_dir, pool) = setup().await;

    let created = users::create(&pool, new_user("Alice", "alice@example.com"))
        .await
        .unwrap();
    assert!(created.id > 0);

    let fetched = users::get_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_all_returns_insertion_order() {
    let (_dir, pool) = setup().await;

    let a = users::create(&pool, new_user("Alice", "alice@example.com"))
        .await
        .unwrap();
    let b = users::create(&pool, new_user("Bob", "bob@example.com"))
        .await
        .unwrap();

    let all = users::get_all(&pool).await.unwrap();
    assert_eq!(all, vec![a, b]);
}

#[tokio::test]
async fn get_by_id_missing_returns_none() {
    let (_dir, pool) = setup().await;

    assert!(users::get_by_id(&pool, 999).await.unwrap().is_none());
}

#[tokio::test]
async fn update_merges_only_supplied_fields() {
    let (_dir, pool) = setup().await;

    let created = users::create(&pool, new_user("Alice", "alice@example.com"))
        .await
        .unwrap();

    let updated = users::update(
        &pool,
        created.id,
        UserUpdate {
            name: Some("Alicia".to_string()),
            email: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "Alicia");
    assert_eq!(updated.email, "alice@example.com");
    assert_eq!(updated.id, created.id);
}

#[tokio::test]
async fn update_missing_returns_none_and_creates_nothing() {
    let (_dir, pool) = setup().await;

    let result = users::update(
        &pool,
        42,
        UserUpdate {
            name: Some("Ghost".to_string()),
            email: None,
        },
    )
    .await
    .unwrap();

    assert!(result.is_none());
    assert!(users::get_all(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_removes_the_row() {
    let (_dir, pool) = setup().await;

    let created = users::create(&pool, new_user("Alice", "alice@example.com"))
        .await
        .unwrap();

    assert!(users::delete(&pool, created.id).await.unwrap());
    assert!(users::get_by_id(&pool, created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_returns_false() {
    let (_dir, pool) = setup().await;

    assert!(!users::delete(&pool, 7).await.unwrap());
}
