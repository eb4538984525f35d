use chrono::{Local, NaiveDate};

/// Clock abstracts access to the current date so ledger operations stay deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the calendar date new records are stamped with.
    fn today(&self) -> NaiveDate;
}

/// Real-time clock backed by the local system date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
