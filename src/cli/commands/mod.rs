//! Command handlers grouped by concern.

mod config;
mod history;
mod ledger;
mod report;
mod system;

use super::registry::CommandRegistry;

/// Builds the registry with every shell command, in help order.
pub fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    for entry in ledger::definitions()
        .into_iter()
        .chain(history::definitions())
        .chain(report::definitions())
        .chain(config::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
    registry
}
