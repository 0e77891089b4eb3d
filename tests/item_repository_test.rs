//! Item Repository Integration Tests

use itemstore::domain::item::{ItemRepository, NewItem};
use itemstore::infrastructure::persistence::{
    create_pool, run_migrations, DatabaseConfig, PgItemRepository,
};
use sqlx::PgPool;

#[tokio::test]
#[ignore] // Requires database
async fn test_item_create_and_get() {
    let pool = setup_database().await;
    let repo = PgItemRepository::new(pool.clone());

    let created = repo
        .create(NewItem {
            name: "test-widget".to_string(),
            description: "a test widget".to_string(),
        })
        .await
        .expect("Failed to create item");

    assert_eq!(created.name, "test-widget");
    assert_eq!(created.description, "a test widget");

    let retrieved = repo
        .find_by_id(created.id)
        .await
        .expect("Failed to get item")
        .expect("Item should exist");

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.name, "test-widget");
    assert_eq!(retrieved.description, "a test widget");

    cleanup_database(pool).await;
}

#[tokio::test]
#[ignore] // Requires database
async fn test_item_update_changes_only_target_row() {
    let pool = setup_database().await;
    let repo = PgItemRepository::new(pool.clone());

    let first = repo
        .create(NewItem {
            name: "test-first".to_string(),
            description: "first".to_string(),
        })
        .await
        .expect("Failed to create item");
    let second = repo
        .create(NewItem {
            name: "test-second".to_string(),
            description: "second".to_string(),
        })
        .await
        .expect("Failed to create item");

    let updated = repo
        .update(
            first.id,
            NewItem {
                name: "test-first-renamed".to_string(),
                description: "renamed".to_string(),
            },
        )
        .await
        .expect("Failed to update item")
        .expect("Item should exist");

    assert_eq!(updated.name, "test-first-renamed");
    assert!(updated.updated_at >= first.updated_at);

    // The other row is untouched
    let other = repo
        .find_by_id(second.id)
        .await
        .expect("Failed to get item")
        .expect("Item should exist");
    assert_eq!(other.name, "test-second");
    assert_eq!(other.description, "second");

    cleanup_database(pool).await;
}

#[tokio::test]
#[ignore] // Requires database
async fn test_item_delete_removes_row() {
    let pool = setup_database().await;
    let repo = PgItemRepository::new(pool.clone());

    let created = repo
        .create(NewItem {
            name: "test-doomed".to_string(),
            description: "soon gone".to_string(),
        })
        .await
        .expect("Failed to create item");

    let deleted = repo
        .delete(created.id)
        .await
        .expect("Failed to delete item")
        .expect("Item should exist");
    assert_eq!(deleted.id, created.id);
    assert_eq!(deleted.name, "test-doomed");

    let retrieved = repo
        .find_by_id(created.id)
        .await
        .expect("Failed to get item");
    assert!(retrieved.is_none());

    cleanup_database(pool).await;
}

#[tokio::test]
#[ignore] // Requires database
async fn test_missing_id_yields_none() {
    let pool = setup_database().await;
    let repo = PgItemRepository::new(pool.clone());

    assert!(repo
        .find_by_id(-1)
        .await
        .expect("Failed to query")
        .is_none());
    assert!(repo
        .update(
            -1,
            NewItem {
                name: "x".to_string(),
                description: "y".to_string()
            }
        )
        .await
        .expect("Failed to query")
        .is_none());
    assert!(repo.delete(-1).await.expect("Failed to query").is_none());

    cleanup_database(pool).await;
}

#[tokio::test]
#[ignore] // Requires database
async fn test_list_respects_limit_and_offset() {
    let pool = setup_database().await;
    let repo = PgItemRepository::new(pool.clone());

    // More rows than any pagination default, to catch silent truncation
    for i in 0..60 {
        repo.create(NewItem {
            name: format!("test-page-{}", i),
            description: "page".to_string(),
        })
        .await
        .expect("Failed to create item");
    }

    // Absent limit is read-all
    let all = repo.list(None, 0).await.expect("Failed to list items");
    let pages: Vec<_> = all
        .iter()
        .filter(|i| i.name.starts_with("test-page-"))
        .collect();
    assert_eq!(pages.len(), 60);

    let limited = repo.list(Some(1), 0).await.expect("Failed to list items");
    assert_eq!(limited.len(), 1);

    cleanup_database(pool).await;
}

// Helper functions

async fn setup_database() -> PgPool {
    let db_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://postgres@localhost/itemstore_test".to_string());

    let config = DatabaseConfig {
        url: db_url,
        max_connections: 5,
        min_connections: 1,
        connect_timeout: std::time::Duration::from_secs(10),
        idle_timeout: std::time::Duration::from_secs(60),
        max_lifetime: std::time::Duration::from_secs(300),
    };

    let pool = create_pool(&config).await.expect("Failed to create pool");
    run_migrations(&pool).await.expect("Failed to run migrations");
    pool
}

async fn cleanup_database(pool: PgPool) {
    // Clean up test data
    sqlx::query("DELETE FROM items WHERE name LIKE 'test-%'")
        .execute(&pool)
        .await
        .ok();
    pool.close().await;
}
