use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One account. Ids are assigned by the store on creation; the balance is
/// kept as an exact decimal and must never drop below zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Wallet {
    pub id: i64,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of a debit/credit request.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WalletRequest {
    pub amount: Decimal,
}
