use crate::core::errors::WalletError;
use crate::core::repository::WalletRepository;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

/// Business rules for balance mutations: amounts must be strictly
/// positive and a committed balance never goes to zero or below via debit.
///
/// Each debit/credit holds a per-wallet mutex across its
/// fetch-compute-persist sequence, so concurrent mutations of the same
/// wallet serialize instead of losing updates. Reads take no lock.
///
/// The registry keeps weak references only; a lock lives exactly as long
/// as the guards holding it, and dead entries are pruned whenever a new
/// lock gets registered, so the map stays bounded by the number of
/// in-flight mutations.
pub struct TransactionService<R: WalletRepository> {
    repository: R,
    wallet_locks: RwLock<HashMap<i64, Weak<Mutex<()>>>>,
}

impl<R: WalletRepository> TransactionService<R> {
    pub fn new(repository: R) -> Self {
        TransactionService {
            repository,
            wallet_locks: RwLock::new(HashMap::new()),
        }
    }

    async fn lock_wallet(&self, wallet_id: i64) -> OwnedMutexGuard<()> {
        let existing = {
            let locks = self.wallet_locks.read().await;
            locks.get(&wallet_id).and_then(Weak::upgrade)
        };
        let lock = match existing {
            Some(lock) => lock,
            None => {
                let mut locks = self.wallet_locks.write().await;
                locks.retain(|_, weak| weak.strong_count() > 0);
                match locks.get(&wallet_id).and_then(Weak::upgrade) {
                    Some(lock) => lock,
                    None => {
                        let lock = Arc::new(Mutex::new(()));
                        locks.insert(wallet_id, Arc::downgrade(&lock));
                        lock
                    }
                }
            }
        };
        lock.lock_owned().await
    }

    #[cfg(test)]
    pub(crate) async fn lock_registry_size(&self) -> usize {
        self.wallet_locks.read().await.len()
    }

    pub async fn get_balance(&self, wallet_id: i64) -> Result<Decimal, WalletError> {
        let wallet = self.repository.get_wallet(wallet_id).await?;
        Ok(wallet.balance)
    }

    pub async fn debit(&self, wallet_id: i64, amount: Decimal) -> Result<(), WalletError> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::NonPositiveAmount);
        }

        let _guard = self.lock_wallet(wallet_id).await;
        let mut wallet = self.repository.get_wallet(wallet_id).await?;
        // A debit down to exactly zero is rejected as well.
        if wallet.balance <= amount {
            return Err(WalletError::InsufficientBalance);
        }

        wallet.balance -= amount;
        self.repository.update_wallet(wallet).await
    }

    pub async fn credit(&self, wallet_id: i64, amount: Decimal) -> Result<(), WalletError> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::NonPositiveAmount);
        }

        let _guard = self.lock_wallet(wallet_id).await;
        let mut wallet = self.repository.get_wallet(wallet_id).await?;
        wallet.balance += amount;
        self.repository.update_wallet(wallet).await
    }
}
