use crate::{clock::Clock, console::Console, statement};

use super::transaction::Transaction;

/// Ledger of a single account.
///
/// Balance and history only change through [`deposit`](Self::deposit) and
/// [`withdraw`](Self::withdraw). The history is append-only and kept in call
/// order; the clock decides the date of each entry.
pub struct AccountService<C, K> {
    console: C,
    clock: K,
    balance: f64,
    transaction_history: Vec<Transaction>,
}

impl<C: Console, K: Clock> AccountService<C, K> {
    /// Creates an empty ledger with a zero balance.
    pub fn new(console: C, clock: K) -> Self {
        Self {
            console,
            clock,
            balance: 0.0,
            transaction_history: Vec::new(),
        }
    }

    /// Adds `amount` to the balance and records it with today's date.
    ///
    /// Negative amounts are accepted as-is.
    pub fn deposit(&mut self, amount: f64) {
        self.record(amount);
    }

    /// Takes `amount` out of the account.
    ///
    /// A withdrawal larger than the current balance is ignored: nothing is
    /// recorded and no error is reported.
    pub fn withdraw(&mut self, amount: f64) {
        if amount > self.balance {
            tracing::debug!(amount, balance = self.balance, "withdrawal rejected: overdraft");
            return;
        }
        self.record(-amount);
    }

    /// Hands the rendered statement to the console in a single call.
    pub fn print_statement(&self) {
        self.console.print(&self.statement());
    }

    /// Renders the statement without printing it.
    pub fn statement(&self) -> String {
        statement::render(&self.transaction_history)
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Recorded transactions in call order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transaction_history
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_history.len()
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    fn record(&mut self, amount: f64) {
        self.balance += amount;
        let transaction = Transaction::new(amount, self.balance, self.clock.today());
        tracing::debug!(
            amount,
            balance = transaction.balance,
            date = %transaction.date,
            "transaction recorded"
        );
        self.transaction_history.push(transaction);
    }
}
