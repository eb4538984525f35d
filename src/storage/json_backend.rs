use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::write_atomic,
    errors::{LedgerError, Result},
    ledger::LedgerState,
};

use super::StorageBackend;

const JSON_INDENT: &[u8] = b"    ";

/// Single-file JSON persistence for the coffee ledger.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<LedgerState> {
        if !self.path.exists() {
            tracing::info!(
                path = %self.path.display(),
                "no data file yet; starting with an empty ledger"
            );
            return Ok(LedgerState::default());
        }
        let state = load_state_from_path(&self.path)?;
        tracing::info!(
            path = %self.path.display(),
            top_ups = state.top_ups.len(),
            purchases = state.purchases.len(),
            "loaded ledger"
        );
        Ok(state)
    }

    fn save(&self, state: &LedgerState) -> Result<()> {
        save_state_to_path(state, &self.path)?;
        tracing::debug!(path = %self.path.display(), "saved ledger");
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Writes `state` next to `path` first and renames it into place, so a failed
/// write never truncates the existing file.
pub fn save_state_to_path(state: &LedgerState, path: &Path) -> Result<()> {
    let json = serialize_state(state)?;
    write_atomic(path, &json)
}

pub fn load_state_from_path(path: &Path) -> Result<LedgerState> {
    let data = fs::read_to_string(path).map_err(|err| {
        LedgerError::Persistence(format!("cannot read `{}`: {}", path.display(), err))
    })?;
    serde_json::from_str(&data).map_err(|err| {
        LedgerError::Persistence(format!(
            "`{}` is not a valid coffee ledger: {}",
            path.display(),
            err
        ))
    })
}

fn serialize_state(state: &LedgerState) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    state.serialize(&mut serializer)?;
    Ok(buf)
}
