pub fn wallet_key(wallet_id: i64) -> String {
    format!("wallet_{}", wallet_id)
}
