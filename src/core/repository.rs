use crate::core::errors::WalletError;
use crate::core::models::wallet::Wallet;
use crate::infrastructure::cache::{Cache, cache_keys};
use crate::infrastructure::storage::WalletStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Single read/write seam the service sees. Implementations own cache-key
/// construction and invalidation.
#[async_trait]
pub trait WalletRepository: Send + Sync {
    async fn get_wallet(&self, wallet_id: i64) -> Result<Wallet, WalletError>;
    async fn update_wallet(&self, wallet: Wallet) -> Result<(), WalletError>;
}

/// Read-through / write-invalidate repository over a durable store and a
/// cache. Cache effects run as detached best-effort tasks: a cache outage
/// degrades read latency, never correctness.
///
/// Each key carries a generation, bumped on every update before the
/// invalidation is spawned. A detached populate captures the generation
/// before its store read and refuses to leave an entry behind once the
/// generation has moved on, so a slow populate cannot resurrect a stale
/// balance after the invalidation already ran.
pub struct CachedWalletRepository<S, C> {
    store: S,
    cache: C,
    cache_ttl: Option<Duration>,
    generations: Arc<RwLock<HashMap<i64, u64>>>,
}

async fn generation_of(generations: &RwLock<HashMap<i64, u64>>, wallet_id: i64) -> u64 {
    generations.read().await.get(&wallet_id).copied().unwrap_or(0)
}

impl<S, C> CachedWalletRepository<S, C>
where
    S: WalletStore,
    C: Cache + Clone + 'static,
{
    pub fn new(store: S, cache: C, cache_ttl: Option<Duration>) -> Self {
        CachedWalletRepository {
            store,
            cache,
            cache_ttl,
            generations: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn get_wallet_from_cache(&self, wallet_id: i64) -> Option<Wallet> {
        let key = cache_keys::wallet_key(wallet_id);
        let payload = match self.cache.get(&key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(err) => {
                warn!(wallet_id, %err, "cache lookup failed, falling back to store");
                return None;
            }
        };
        match serde_json::from_str(&payload) {
            Ok(wallet) => Some(wallet),
            Err(err) => {
                warn!(wallet_id, %err, "couldn't decode cached wallet, treating as miss");
                None
            }
        }
    }

    fn populate_cache(&self, wallet: &Wallet, generation: u64) {
        // Off the caller's critical path; a dropped write only costs the
        // next read a store round-trip.
        let payload = match serde_json::to_string(wallet) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(wallet_id = wallet.id, %err, "couldn't encode wallet for cache");
                return;
            }
        };
        let cache = self.cache.clone();
        let generations = self.generations.clone();
        let wallet_id = wallet.id;
        let key = cache_keys::wallet_key(wallet_id);
        let ttl = self.cache_ttl;
        tokio::spawn(async move {
            if generation_of(&generations, wallet_id).await != generation {
                return;
            }
            if let Err(err) = cache.set(&key, &payload, ttl).await {
                debug!(%key, %err, "best-effort cache populate failed");
                return;
            }
            // An update may have invalidated the key while the write was
            // in flight; clear our own entry instead of leaving it stale.
            if generation_of(&generations, wallet_id).await != generation {
                if let Err(err) = cache.delete(&key).await {
                    debug!(%key, %err, "couldn't clear superseded cache populate");
                }
            }
        });
    }
}

#[async_trait]
impl<S, C> WalletRepository for CachedWalletRepository<S, C>
where
    S: WalletStore,
    C: Cache + Clone + 'static,
{
    async fn get_wallet(&self, wallet_id: i64) -> Result<Wallet, WalletError> {
        if let Some(wallet) = self.get_wallet_from_cache(wallet_id).await {
            return Ok(wallet);
        }

        // Captured before the store read: any update that lands afterwards
        // bumps the generation and the populate below discards itself.
        let generation = generation_of(&self.generations, wallet_id).await;

        let wallet = self
            .store
            .find_by_id(wallet_id)
            .await?
            .ok_or(WalletError::WalletNotFound(wallet_id))?;

        self.populate_cache(&wallet, generation);

        Ok(wallet)
    }

    async fn update_wallet(&self, wallet: Wallet) -> Result<(), WalletError> {
        let wallet_id = wallet.id;
        self.store.save(wallet).await?;

        {
            let mut generations = self.generations.write().await;
            *generations.entry(wallet_id).or_insert(0) += 1;
        }

        // Invalidate rather than refresh: the next read goes to the store.
        // The caller never waits on this.
        let cache = self.cache.clone();
        tokio::spawn(async move {
            let key = cache_keys::wallet_key(wallet_id);
            if let Err(err) = cache.delete(&key).await {
                debug!(%key, %err, "best-effort cache invalidation failed");
            }
        });

        Ok(())
    }
}
