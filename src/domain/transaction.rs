use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "account_number")]
    pub account_id: String, // lookup key only, the account may not exist
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal, // negative = debit
    pub date: DateTime<Utc>,
    pub description: String,
}

impl core::fmt::Display for Transaction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "tx={},account={},amount={},date={},description={}",
            self.id,
            self.account_id,
            self.amount,
            self.date.to_rfc3339(),
            self.description
        )
    }
}
