use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded deposit or withdrawal.
///
/// `amount` is positive for deposits and negative for withdrawals; `balance` is
/// the account balance right after this entry was applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    pub balance: f64,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(amount: f64, balance: f64, date: NaiveDate) -> Self {
        Self {
            amount,
            balance,
            date,
        }
    }
}
