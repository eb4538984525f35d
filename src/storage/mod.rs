pub mod json_backend;

use std::path::Path;

use crate::{errors::Result, ledger::LedgerState};

/// Abstraction over where the ledger state is persisted.
pub trait StorageBackend: Send + Sync {
    /// Returns the stored state, or a fresh default state when nothing has been saved yet.
    fn load(&self) -> Result<LedgerState>;
    /// Replaces the stored state with `state`.
    fn save(&self, state: &LedgerState) -> Result<()>;
    fn location(&self) -> &Path;
}

pub use json_backend::{load_state_from_path, save_state_to_path, JsonStorage};
