#![doc(test(attr(deny(warnings))))]

//! Account Ledger keeps the transaction history of a single bank account:
//! dated deposits, withdrawals that refuse to overdraw, and a printable
//! statement listing the most recent entries first.
//!
//! The clock and the output console are injected, so callers decide which
//! date each transaction carries and where statements end up.

pub mod cli;
pub mod clock;
pub mod config;
pub mod console;
pub mod errors;
pub mod ledger;
pub mod statement;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use console::{BufferConsole, Console, StdoutConsole};
pub use errors::LedgerError;
pub use ledger::{AccountService, Transaction};

/// Initializes global tracing with the default filter and emits a startup info log.
pub fn init() {
    init_with_filter(config::DEFAULT_LOG_FILTER);
}

/// Initializes global tracing using `filter` unless `RUST_LOG` overrides it.
pub fn init_with_filter(filter: &str) {
    utils::init_tracing(filter);
}
