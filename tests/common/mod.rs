#![allow(dead_code)]

use std::{cell::Cell, rc::Rc};

use account_ledger::{AccountService, BufferConsole, Clock, FixedClock};
use chrono::NaiveDate;

pub type TestLedger = AccountService<Rc<BufferConsole>, Rc<FixedClock>>;

/// Ledger wired to a recording console and a pinned clock, with handles to both.
pub struct Harness {
    pub ledger: TestLedger,
    pub console: Rc<BufferConsole>,
    pub clock: Rc<FixedClock>,
}

impl Harness {
    pub fn starting_on(date: NaiveDate) -> Self {
        let console = Rc::new(BufferConsole::new());
        let clock = Rc::new(FixedClock::new(date));
        let ledger = AccountService::new(Rc::clone(&console), Rc::clone(&clock));
        Self {
            ledger,
            console,
            clock,
        }
    }

    pub fn on(&self, date: NaiveDate) -> &Self {
        self.clock.set(date);
        self
    }

    /// Prints the statement and returns what reached the console.
    pub fn printed_statement(&self) -> String {
        self.ledger.print_statement();
        self.console.last().expect("statement printed")
    }
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Pinned clock that counts how often the ledger asks for the date.
#[derive(Debug)]
pub struct CountingClock {
    date: NaiveDate,
    calls: Cell<usize>,
}

impl CountingClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Clock for CountingClock {
    fn today(&self) -> NaiveDate {
        self.calls.set(self.calls.get() + 1);
        self.date
    }
}
