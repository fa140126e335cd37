pub mod cache_keys;
pub mod in_memory;

use crate::core::errors::WalletError;
use async_trait::async_trait;
use std::time::Duration;

/// Key/value cache with optional per-entry TTL. A missing key is
/// `Ok(None)`, not an error; `None` TTL means the entry never expires.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, WalletError>;
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), WalletError>;
    async fn delete(&self, key: &str) -> Result<(), WalletError>;
}
