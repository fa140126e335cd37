pub mod in_memory;

use crate::core::errors::WalletError;
use crate::core::models::wallet::Wallet;
use async_trait::async_trait;

/// Durable wallet store. The store is the source of truth; the cache in
/// front of it is only an optimization.
#[async_trait]
pub trait WalletStore: Send + Sync {
    /// Point read by id. A wallet that does not exist is `Ok(None)`,
    /// distinct from any store failure.
    async fn find_by_id(&self, wallet_id: i64) -> Result<Option<Wallet>, WalletError>;

    /// Full-row upsert.
    async fn save(&self, wallet: Wallet) -> Result<(), WalletError>;
}
