mod cache_tests;

use crate::core::repository::CachedWalletRepository;
use crate::core::service::TransactionService;
use crate::infrastructure::cache::in_memory::InMemoryCache;
use crate::infrastructure::storage::in_memory::InMemoryStore;
use rust_decimal::Decimal;

pub async fn create_test_service() -> TransactionService<CachedWalletRepository<InMemoryStore, InMemoryCache>> {
    let (store, cache) = seeded_backends().await;
    TransactionService::new(CachedWalletRepository::new(store, cache, None))
}

/// Store seeded the way the original test environment seeds it: wallet 1
/// holds 20, wallets 2 and 3 hold 136.02.
pub async fn seeded_backends() -> (InMemoryStore, InMemoryCache) {
    let store = InMemoryStore::new();
    store.create(Decimal::from(20)).await;
    store.create(Decimal::new(13_602, 2)).await;
    store.create(Decimal::new(13_602, 2)).await;
    (store, InMemoryCache::new())
}
