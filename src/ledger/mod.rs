//! Account ledger and its transaction record.

pub mod account;
pub mod transaction;

pub use account::AccountService;
pub use transaction::Transaction;
