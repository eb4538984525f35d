use std::collections::BTreeMap;

use crate::ledger::LedgerState;

/// Total spent on coffee within one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// `YYYY-MM`
    pub month: String,
    pub total: f64,
}

impl MonthlyTotal {
    pub fn new(month: impl Into<String>, total: f64) -> Self {
        Self {
            month: month.into(),
            total,
        }
    }
}

/// Balance snapshot paired with whether it sits under the warning threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceStatus {
    pub balance: f64,
    pub low: bool,
}

pub struct SummaryService;

impl SummaryService {
    /// Sums purchase prices per month, ascending by month key.
    /// Months without purchases are not listed.
    pub fn monthly_spending(state: &LedgerState) -> Vec<MonthlyTotal> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for purchase in &state.purchases {
            *totals.entry(purchase.month_key()).or_insert(0.0) += purchase.price;
        }
        totals
            .into_iter()
            .map(|(month, total)| MonthlyTotal::new(month, total))
            .collect()
    }

    pub fn balance_status(state: &LedgerState, low_threshold: f64) -> BalanceStatus {
        let balance = state.balance();
        BalanceStatus {
            balance,
            low: balance < low_threshold,
        }
    }
}
