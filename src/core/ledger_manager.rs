use std::{path::Path, sync::Arc};

use crate::core::clock::Clock;
use crate::core::services::{BalanceStatus, ExportService, MonthlyTotal, SummaryService};
use crate::errors::Result;
use crate::ledger::{CoffeePurchase, LedgerState, TopUp};
use crate::storage::StorageBackend;

/// Facade that owns the ledger state and keeps it in step with storage.
///
/// Every mutating call either applies the change and persists it, or leaves
/// both memory and disk exactly as they were.
pub struct LedgerManager {
    state: LedgerState,
    storage: Box<dyn StorageBackend>,
    clock: Arc<dyn Clock>,
}

impl LedgerManager {
    /// Loads the persisted state (or defaults when nothing was saved yet).
    pub fn open(storage: Box<dyn StorageBackend>, clock: Arc<dyn Clock>) -> Result<Self> {
        let state = storage.load()?;
        Ok(Self::with_state(state, storage, clock))
    }

    pub fn with_state(
        state: LedgerState,
        storage: Box<dyn StorageBackend>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            state,
            storage,
            clock,
        }
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    pub fn balance(&self) -> f64 {
        self.state.balance()
    }

    pub fn balance_status(&self, low_threshold: f64) -> BalanceStatus {
        SummaryService::balance_status(&self.state, low_threshold)
    }

    pub fn default_price(&self) -> f64 {
        self.state.default_price
    }

    pub fn top_ups(&self) -> &[TopUp] {
        &self.state.top_ups
    }

    pub fn purchases(&self) -> &[CoffeePurchase] {
        &self.state.purchases
    }

    pub fn add_top_up(&mut self, amount_text: &str) -> Result<TopUp> {
        let today = self.clock.today();
        let top_up = self.commit(|state| state.add_top_up(amount_text, today).cloned())?;
        tracing::info!(amount = top_up.amount, date = %top_up.date, "top-up added");
        Ok(top_up)
    }

    /// Removes the newest top-up. Returns `None` without touching storage when there is none.
    pub fn undo_last_top_up(&mut self) -> Result<Option<TopUp>> {
        if self.state.top_ups.is_empty() {
            tracing::debug!("no top-up to undo");
            return Ok(None);
        }
        let removed = self.commit(|state| Ok(state.undo_last_top_up()))?;
        tracing::info!(removed = ?removed, "top-up undone");
        Ok(removed)
    }

    /// Sets the price used for future purchases and returns the previous price.
    pub fn set_default_price(&mut self, price_text: &str) -> Result<f64> {
        let previous = self.commit(|state| state.set_default_price(price_text))?;
        tracing::info!(
            previous,
            current = self.state.default_price,
            "default coffee price updated"
        );
        Ok(previous)
    }

    pub fn buy_coffee(&mut self) -> Result<CoffeePurchase> {
        let today = self.clock.today();
        let purchase = self.commit(|state| Ok(state.buy_coffee(today).clone()))?;
        tracing::info!(price = purchase.price, date = %purchase.date, "coffee bought");
        Ok(purchase)
    }

    /// Removes the newest purchase. Returns `None` without touching storage when there is none.
    pub fn undo_last_purchase(&mut self) -> Result<Option<CoffeePurchase>> {
        if self.state.purchases.is_empty() {
            tracing::debug!("no purchase to undo");
            return Ok(None);
        }
        let removed = self.commit(|state| Ok(state.undo_last_purchase()))?;
        tracing::info!(removed = ?removed, "purchase undone");
        Ok(removed)
    }

    pub fn monthly_spending(&self) -> Vec<MonthlyTotal> {
        SummaryService::monthly_spending(&self.state)
    }

    pub fn export_csv(&self, destination: &Path) -> Result<()> {
        ExportService::export_csv(&self.state, destination)
    }

    fn commit<T>(&mut self, apply: impl FnOnce(&mut LedgerState) -> Result<T>) -> Result<T> {
        let snapshot = self.state.clone();
        let outcome = apply(&mut self.state)?;
        if let Err(err) = self.storage.save(&self.state) {
            tracing::warn!(error = %err, "persisting ledger failed; change rolled back");
            self.state = snapshot;
            return Err(err);
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::errors::LedgerError;
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use std::sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex,
    };

    #[derive(Default)]
    struct RecordingStorage {
        saved: Mutex<Option<LedgerState>>,
        saves: AtomicUsize,
        fail: AtomicBool,
        path: PathBuf,
    }

    impl StorageBackend for Arc<RecordingStorage> {
        fn load(&self) -> Result<LedgerState> {
            Ok(self.saved.lock().unwrap().clone().unwrap_or_default())
        }

        fn save(&self, state: &LedgerState) -> Result<()> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(LedgerError::Persistence("disk full".into()));
            }
            self.saves.fetch_add(1, Ordering::SeqCst);
            *self.saved.lock().unwrap() = Some(state.clone());
            Ok(())
        }

        fn location(&self) -> &Path {
            &self.path
        }
    }

    fn manager() -> (LedgerManager, Arc<RecordingStorage>) {
        let storage = Arc::new(RecordingStorage::default());
        let clock = Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        let manager = LedgerManager::open(Box::new(storage.clone()), clock).unwrap();
        (manager, storage)
    }

    #[test]
    fn every_mutation_is_persisted() {
        let (mut manager, storage) = manager();
        manager.add_top_up("40").unwrap();
        manager.buy_coffee().unwrap();
        manager.set_default_price("6").unwrap();
        manager.undo_last_purchase().unwrap();
        manager.undo_last_top_up().unwrap();

        assert_eq!(storage.saves.load(Ordering::SeqCst), 5);
        let saved = storage.saved.lock().unwrap().clone().unwrap();
        assert_eq!(&saved, manager.state());
        assert_eq!(saved.default_price, 6.0);
    }

    #[test]
    fn records_are_stamped_with_the_clock_date() {
        let (mut manager, _storage) = manager();
        let top_up = manager.add_top_up("10").unwrap();
        let purchase = manager.buy_coffee().unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(top_up.date, expected);
        assert_eq!(purchase.date, expected);
    }

    #[test]
    fn undo_on_empty_history_skips_storage() {
        let (mut manager, storage) = manager();
        assert!(manager.undo_last_top_up().unwrap().is_none());
        assert!(manager.undo_last_purchase().unwrap().is_none());
        assert_eq!(storage.saves.load(Ordering::SeqCst), 0);
        assert_eq!(manager.balance(), 0.0);
    }

    #[test]
    fn invalid_amount_does_not_save() {
        let (mut manager, storage) = manager();
        let err = manager.add_top_up("abc").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
        assert!(manager.top_ups().is_empty());
        assert_eq!(storage.saves.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failed_save_rolls_back_the_change() {
        let (mut manager, storage) = manager();
        manager.add_top_up("30").unwrap();
        storage.fail.store(true, Ordering::SeqCst);

        assert!(matches!(
            manager.buy_coffee(),
            Err(LedgerError::Persistence(_))
        ));
        assert!(manager.set_default_price("9").is_err());
        assert!(manager.undo_last_top_up().is_err());

        assert!(manager.purchases().is_empty());
        assert_eq!(manager.default_price(), 5.0);
        assert_eq!(manager.balance(), 30.0);
    }
}
