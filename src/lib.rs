#![doc(test(attr(deny(warnings))))]

//! Coffee Budget tracks a prepaid coffee allowance: top-ups raise the balance,
//! purchases at the configured default price lower it, and the whole history
//! lives in a single JSON file.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use crate::core::{Clock, FixedClock, LedgerManager, SystemClock};
pub use errors::LedgerError;
pub use ledger::{CoffeePurchase, LedgerState, TopUp};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Coffee Budget tracing initialized.");
    });
}
