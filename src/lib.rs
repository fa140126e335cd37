pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::WalletError;
pub use crate::core::models::wallet::Wallet;
pub use crate::core::repository::{CachedWalletRepository, WalletRepository};
pub use crate::core::service::TransactionService;
pub use crate::infrastructure::cache::in_memory::InMemoryCache;
pub use crate::infrastructure::storage::in_memory::InMemoryStore;

#[cfg(test)]
mod tests;
