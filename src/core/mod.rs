//! Ledger orchestration: the state manager, date source, and read-side services.

pub mod clock;
pub mod ledger_manager;
pub mod services;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger_manager::LedgerManager;
