use crate::infrastructure::cache::{Cache, cache_keys};
use crate::infrastructure::cache::in_memory::InMemoryCache;
use std::time::Duration;

#[test]
fn test_wallet_key_format() {
    assert_eq!(cache_keys::wallet_key(42), "wallet_42");
}

#[tokio::test]
async fn test_missing_key_is_none_not_error() {
    let cache = InMemoryCache::new();
    assert_eq!(cache.get("wallet_1").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_get_delete() {
    let cache = InMemoryCache::new();
    cache.set("wallet_1", "payload", None).await.unwrap();
    assert_eq!(cache.get("wallet_1").await.unwrap().as_deref(), Some("payload"));

    cache.delete("wallet_1").await.unwrap();
    assert_eq!(cache.get("wallet_1").await.unwrap(), None);
}

#[tokio::test]
async fn test_entries_expire_after_ttl() {
    let cache = InMemoryCache::new();
    cache
        .set("wallet_1", "payload", Some(Duration::from_millis(30)))
        .await
        .unwrap();
    assert!(cache.get("wallet_1").await.unwrap().is_some());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(cache.get("wallet_1").await.unwrap(), None);
}

#[tokio::test]
async fn test_entries_without_ttl_do_not_expire() {
    let cache = InMemoryCache::new();
    cache.set("wallet_1", "payload", None).await.unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(cache.get("wallet_1").await.unwrap().is_some());
}
