use crate::core::errors::WalletError;
use crate::core::models::wallet::Wallet;
use crate::infrastructure::storage::WalletStore;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStore {
    wallets: Arc<RwLock<HashMap<i64, Wallet>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            wallets: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Creates a wallet with a store-assigned id. Only seeding uses this;
    /// the API never creates wallets.
    pub async fn create(&self, mut balance: Decimal) -> Wallet {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        balance.rescale(8);
        let now = Utc::now();
        let wallet = Wallet {
            id,
            balance,
            created_at: now,
            updated_at: now,
        };
        let mut wallets = self.wallets.write().await;
        wallets.insert(id, wallet.clone());
        wallet
    }
}

#[async_trait]
impl WalletStore for InMemoryStore {
    async fn find_by_id(&self, wallet_id: i64) -> Result<Option<Wallet>, WalletError> {
        let wallets = self.wallets.read().await;
        Ok(wallets.get(&wallet_id).cloned())
    }

    async fn save(&self, mut wallet: Wallet) -> Result<(), WalletError> {
        // Records hold balances at a fixed scale of 8 fractional digits
        wallet.balance.rescale(8);
        wallet.updated_at = Utc::now();
        let mut wallets = self.wallets.write().await;
        wallets.insert(wallet.id, wallet);
        Ok(())
    }
}
