//! Shared runtime state for CLI interactions and command execution.

use std::sync::Arc;

use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    core::{LedgerManager, SystemClock},
    errors::CliError,
    storage::JsonStorage,
};

use super::{
    commands,
    output::{self, OutputPreferences},
    registry::CommandRegistry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub manager: LedgerManager,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    /// Builds a context from the user's config and data file.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let data_file = config.data_file_or(config_manager.base_dir());
        let storage = JsonStorage::new(data_file);
        let manager = LedgerManager::open(Box::new(storage), Arc::new(SystemClock))?;
        Ok(Self::from_parts(mode, manager, config_manager, config))
    }

    pub fn from_parts(
        mode: CliMode,
        manager: LedgerManager,
        config_manager: ConfigManager,
        config: Config,
    ) -> Self {
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled,
        });
        Self {
            mode,
            registry: commands::registry(),
            manager,
            config_manager,
            config,
            theme: ColorfulTheme::default(),
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        format!("coffee [{:.2}]> ", self.manager.balance())
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }
}
