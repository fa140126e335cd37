use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    /// Wallet with the given ID has no backing record
    #[error("wallet with id={0} not found")]
    WalletNotFound(i64),

    /// Debit/credit amount is zero or negative
    #[error("operation not allowed: the amount must be positive")]
    NonPositiveAmount,

    /// Debit would take the balance to zero or below
    #[error("operation not allowed: a wallet balance cannot go below 0.")]
    InsufficientBalance,

    /// Persistent store failure
    #[error("storage error: {0}")]
    StorageError(String),

    /// Cache failure; recovered at the repository boundary, never
    /// surfaced to callers on the read/write paths
    #[error("cache error: {0}")]
    CacheError(String),

    /// Wallet payload could not be encoded or decoded
    #[error("serialization error: {0}")]
    SerializationError(String),
}
