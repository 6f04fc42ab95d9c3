//! Storage tests
//!
//! SeaORM SQLite backend: id assignment, lookup and counting.

mod common;

use std::collections::HashSet;

use common::fresh_storage;

#[tokio::test]
async fn test_ids_are_sequential_from_one() {
    let (_dir, storage) = fresh_storage().await;

    let first = storage.create("https://www.example.com").await.unwrap();
    let second = storage.create("https://freecodecamp.org").await.unwrap();
    let third = storage.create("https://www.example.com").await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(third.id, 3);
    assert_eq!(storage.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_lookup_hit_and_miss() {
    let (_dir, storage) = fresh_storage().await;

    let created = storage
        .create("https://example.com/path?q=1&lang=en#top")
        .await
        .unwrap();

    let found = storage.lookup(created.id).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.original_url, "https://example.com/path?q=1&lang=en#top");

    assert!(storage.lookup(created.id + 1).await.unwrap().is_none());
    assert!(storage.lookup(0).await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_storage_counts_zero() {
    let (_dir, storage) = fresh_storage().await;
    assert_eq!(storage.count().await.unwrap(), 0);
    assert!(storage.lookup(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_urls_get_distinct_ids() {
    let (_dir, storage) = fresh_storage().await;

    let a = storage.create("https://www.example.com").await.unwrap();
    let b = storage.create("https://www.example.com").await.unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(storage.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_concurrent_creates_never_share_an_id() {
    let (_dir, storage) = fresh_storage().await;

    let mut handles = Vec::new();
    for i in 0..20 {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            storage
                .create(&format!("https://www.example.com/{}", i))
                .await
                .unwrap()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let record = handle.await.unwrap();
        assert!(ids.insert(record.id), "duplicate id {}", record.id);
    }

    assert_eq!(ids.len(), 20);
    assert_eq!(storage.count().await.unwrap(), 20);
    assert!(ids.iter().all(|id| (1..=20).contains(id)));
}

#[tokio::test]
async fn test_data_survives_reconnect() {
    let (dir, storage) = fresh_storage().await;
    storage.create("https://freecodecamp.org").await.unwrap();
    storage.close().await.unwrap();

    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("shorturl_test.db").display()
    );
    let reopened = shorturl::storage::SeaOrmStorage::new(&url, "sqlite")
        .await
        .unwrap();

    let record = reopened.lookup(1).await.unwrap().unwrap();
    assert_eq!(record.original_url, "https://freecodecamp.org");

    // 自增继续，不会复用已有 ID
    let next = reopened.create("https://example.com").await.unwrap();
    assert_eq!(next.id, 2);
}
