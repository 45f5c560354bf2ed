use std::{cell::Cell, rc::Rc};

use chrono::{DateTime, NaiveDate, Utc};

/// Clock abstracts access to the current date so the ledger stays deterministic in tests.
pub trait Clock {
    /// Returns the calendar date a transaction recorded now should carry.
    fn today(&self) -> NaiveDate;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<T: Clock + ?Sized> Clock for Rc<T> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Real-time clock backed by the system UTC time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock pinned to a caller-chosen date.
///
/// The date can be moved through a shared reference, which lets a test keep a
/// handle to the clock it injected and back-date or forward-date entries.
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Cell<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Cell::new(date),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        self.date.set(date);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}
