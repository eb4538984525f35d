use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A deposit into the coffee budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopUp {
    pub amount: f64,
    pub date: NaiveDate,
}

impl TopUp {
    pub fn new(amount: f64, date: NaiveDate) -> Self {
        Self { amount, date }
    }
}

/// A coffee bought at the default price in effect on `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeePurchase {
    pub price: f64,
    pub date: NaiveDate,
}

impl CoffeePurchase {
    pub fn new(price: f64, date: NaiveDate) -> Self {
        Self { price, date }
    }

    /// `YYYY-MM` bucket used by the monthly spending report.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_is_zero_padded() {
        let purchase = CoffeePurchase::new(5.0, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(purchase.month_key(), "2024-03");
    }

    #[test]
    fn dates_serialize_as_iso_strings() {
        let top_up = TopUp::new(100.0, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        let json = serde_json::to_string(&top_up).unwrap();
        assert_eq!(json, r#"{"amount":100.0,"date":"2024-01-15"}"#);
    }
}
