use crate::core::errors::WalletError;
use crate::infrastructure::cache::Cache;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryCache {
    entries: Arc<RwLock<HashMap<String, (String, Option<DateTime<Utc>>)>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        InMemoryCache {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, WalletError> {
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some((_, Some(expires_at))) if *expires_at <= Utc::now() => {
                entries.remove(key);
                Ok(None)
            }
            Some((value, _)) => Ok(Some(value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), WalletError> {
        let expires_at = match ttl {
            Some(ttl) => Some(
                Utc::now()
                    + chrono::Duration::from_std(ttl)
                        .map_err(|e| WalletError::CacheError(format!("invalid TTL: {}", e)))?,
            ),
            None => None,
        };
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), (value.to_string(), expires_at));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), WalletError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}
