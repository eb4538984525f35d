//! Coffee budget state, history records, and amount helpers.

pub mod amount;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod record;

pub use amount::{format_amount, parse_amount};
pub use ledger::{compute_balance, LedgerState, DEFAULT_COFFEE_PRICE};
pub use record::{CoffeePurchase, TopUp};
