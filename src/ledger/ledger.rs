use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    amount::parse_amount,
    record::{CoffeePurchase, TopUp},
};
use crate::errors::Result;

/// Price applied to purchases when no price has been configured yet.
pub const DEFAULT_COFFEE_PRICE: f64 = 5.0;

/// Complete persisted state of the coffee budget.
///
/// The serialized field names match data files written by earlier releases;
/// the camelCase spellings are accepted when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    #[serde(rename = "top_ups", alias = "topUps", default)]
    pub top_ups: Vec<TopUp>,
    #[serde(rename = "coffees", alias = "purchases", default)]
    pub purchases: Vec<CoffeePurchase>,
    #[serde(
        rename = "default_coffee_price",
        alias = "defaultPrice",
        default = "LedgerState::default_price_value"
    )]
    pub default_price: f64,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self {
            top_ups: Vec::new(),
            purchases: Vec::new(),
            default_price: DEFAULT_COFFEE_PRICE,
        }
    }
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_price_value() -> f64 {
        DEFAULT_COFFEE_PRICE
    }

    /// Parses `amount_text` and records a top-up dated `today`.
    /// Nothing changes when the text is not a number.
    pub fn add_top_up(&mut self, amount_text: &str, today: NaiveDate) -> Result<&TopUp> {
        let amount = parse_amount(amount_text)?;
        self.top_ups.push(TopUp::new(amount, today));
        Ok(&self.top_ups[self.top_ups.len() - 1])
    }

    pub fn undo_last_top_up(&mut self) -> Option<TopUp> {
        self.top_ups.pop()
    }

    /// Replaces the default price, returning the previous one.
    pub fn set_default_price(&mut self, price_text: &str) -> Result<f64> {
        let price = parse_amount(price_text)?;
        Ok(std::mem::replace(&mut self.default_price, price))
    }

    /// Records a purchase at the current default price. Balance may go negative.
    pub fn buy_coffee(&mut self, today: NaiveDate) -> &CoffeePurchase {
        self.purchases
            .push(CoffeePurchase::new(self.default_price, today));
        &self.purchases[self.purchases.len() - 1]
    }

    pub fn undo_last_purchase(&mut self) -> Option<CoffeePurchase> {
        self.purchases.pop()
    }

    pub fn total_top_ups(&self) -> f64 {
        self.top_ups.iter().map(|top_up| top_up.amount).sum()
    }

    pub fn total_spent(&self) -> f64 {
        self.purchases.iter().map(|purchase| purchase.price).sum()
    }

    /// Always derived from the two histories; never cached.
    pub fn balance(&self) -> f64 {
        self.total_top_ups() - self.total_spent()
    }
}

/// Free-function form of [`LedgerState::balance`].
pub fn compute_balance(state: &LedgerState) -> f64 {
    state.balance()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LedgerError;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_state_is_empty_with_default_price() {
        let state = LedgerState::new();
        assert!(state.top_ups.is_empty());
        assert!(state.purchases.is_empty());
        assert_eq!(state.default_price, DEFAULT_COFFEE_PRICE);
        assert_eq!(state.balance(), 0.0);
    }

    #[test]
    fn purchases_keep_the_price_in_effect_when_bought() {
        let today = day(2024, 5, 2);
        let mut state = LedgerState::new();
        state.add_top_up("100", today).unwrap();
        state.buy_coffee(today);
        state.buy_coffee(today);
        assert_eq!(state.balance(), 90.0);

        let previous = state.set_default_price("7").unwrap();
        assert_eq!(previous, 5.0);
        state.buy_coffee(today);

        assert_eq!(state.balance(), 83.0);
        let prices: Vec<f64> = state.purchases.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![5.0, 5.0, 7.0]);
    }

    #[test]
    fn invalid_top_up_leaves_state_untouched() {
        let mut state = LedgerState::new();
        state.add_top_up("20", day(2024, 1, 1)).unwrap();
        let before = state.clone();

        let err = state.add_top_up("abc", day(2024, 1, 2)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
        assert_eq!(state, before);
    }

    #[test]
    fn invalid_price_keeps_previous_price() {
        let mut state = LedgerState::new();
        assert!(state.set_default_price("cheap").is_err());
        assert_eq!(state.default_price, DEFAULT_COFFEE_PRICE);
    }

    #[test]
    fn undo_on_empty_sequences_is_a_no_op() {
        let mut state = LedgerState::new();
        assert!(state.undo_last_top_up().is_none());
        assert!(state.undo_last_purchase().is_none());
        assert_eq!(state, LedgerState::new());
        assert_eq!(compute_balance(&state), 0.0);
    }

    #[test]
    fn undo_removes_most_recent_entry_only() {
        let mut state = LedgerState::new();
        state.add_top_up("10", day(2024, 1, 1)).unwrap();
        state.add_top_up("25", day(2024, 1, 2)).unwrap();

        let removed = state.undo_last_top_up().unwrap();
        assert_eq!(removed.amount, 25.0);
        assert_eq!(state.top_ups.len(), 1);
        assert_eq!(state.top_ups[0].amount, 10.0);
    }

    #[test]
    fn balance_tracks_sums_through_mixed_operations() {
        let today = day(2024, 6, 1);
        let mut state = LedgerState::new();
        let steps: [fn(&mut LedgerState, NaiveDate); 6] = [
            |s, d| {
                s.add_top_up("50", d).unwrap();
            },
            |s, d| {
                s.buy_coffee(d);
            },
            |s, _| {
                s.undo_last_top_up();
            },
            |s, d| {
                s.add_top_up("12.5", d).unwrap();
            },
            |s, _| {
                s.undo_last_purchase();
            },
            |s, d| {
                s.buy_coffee(d);
            },
        ];
        for step in steps {
            step(&mut state, today);
            let expected = state.top_ups.iter().map(|t| t.amount).sum::<f64>()
                - state.purchases.iter().map(|p| p.price).sum::<f64>();
            assert_eq!(state.balance(), expected);
        }
        assert_eq!(state.balance(), 7.5);
    }

    #[test]
    fn reads_legacy_field_names_and_camel_case_aliases() {
        let legacy = r#"{
            "top_ups": [{"amount": 100, "date": "2024-01-15"}],
            "coffees": [{"price": 5, "date": "2024-01-16"}],
            "default_coffee_price": 6
        }"#;
        let camel = r#"{
            "topUps": [{"amount": 100, "date": "2024-01-15"}],
            "purchases": [{"price": 5, "date": "2024-01-16"}],
            "defaultPrice": 6
        }"#;
        let from_legacy: LedgerState = serde_json::from_str(legacy).unwrap();
        let from_camel: LedgerState = serde_json::from_str(camel).unwrap();
        assert_eq!(from_legacy, from_camel);
        assert_eq!(from_legacy.default_price, 6.0);
        assert_eq!(from_legacy.balance(), 95.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let state: LedgerState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, LedgerState::default());
    }
}
