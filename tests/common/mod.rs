#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc};

use chrono::NaiveDate;
use coffee_budget::{
    core::FixedClock,
    storage::JsonStorage,
    LedgerManager,
};
use tempfile::TempDir;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Isolated data directory; keep the guard alive for the duration of the test.
pub struct TestEnv {
    pub dir: TempDir,
    pub data_file: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let data_file = dir.path().join("coffee_data.json");
        Self { dir, data_file }
    }

    /// Opens a manager over this environment's data file with the clock pinned to `today`.
    pub fn manager_on(&self, today: NaiveDate) -> LedgerManager {
        LedgerManager::open(
            Box::new(JsonStorage::new(self.data_file.clone())),
            Arc::new(FixedClock::new(today)),
        )
        .expect("open ledger manager")
    }
}
