//! Command dispatch, error reporting, and shared command helpers.

use std::io;

use shell_words::split;
use strsim::levenshtein;

use crate::errors::{CliError, LedgerError};
use crate::ledger::format_amount;

use super::io as cli_io;
pub use super::shell_context::{CliMode, ShellContext};

const LOW_BALANCE_MARKER: &str = "⚠️";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Ledger(inner) => CliError::Core(inner),
            other => CliError::Command(other.to_string()),
        }
    }
}

impl ShellContext {
    /// Tokenizes and runs one line of input.
    pub fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match split(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };
        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        tracing::debug!(command, ?args, "dispatching command");
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(CliError::from)
    }

    /// Shows a failed command to the user. Nothing here ends the shell.
    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_info("Use `help <command>` for usage details.");
            }
            CommandError::Ledger(LedgerError::InvalidAmount(text)) => {
                tracing::warn!(input = %text, "rejected non-numeric amount");
                cli_io::print_error(format!("`{}` is not a valid amount.", text));
            }
            CommandError::Ledger(LedgerError::Export(message)) => {
                cli_io::print_warning(format!("Export not written: {}", message));
            }
            other => {
                tracing::error!(error = %other, "command failed");
                cli_io::print_error(other.to_string());
            }
        }
    }

    /// Prints the balance line, flagged when under the configured threshold.
    pub(crate) fn print_balance(&self) {
        let status = self
            .manager
            .balance_status(self.config.low_balance_threshold);
        let line = balance_line(status.balance, self.currency(), status.low);
        if status.low {
            cli_io::print_warning(line);
        } else {
            cli_io::print_info(line);
        }
    }

    /// Returns the first argument, or asks for it interactively.
    /// In script mode a missing argument is a usage error.
    pub(crate) fn arg_or_prompt(
        &self,
        args: &[&str],
        prompt: &str,
        usage: &str,
    ) -> Result<String, CommandError> {
        if let Some(value) = args.first() {
            return Ok((*value).to_string());
        }
        match self.mode {
            CliMode::Interactive => cli_io::prompt_text(&self.theme, prompt),
            CliMode::Script => Err(CommandError::InvalidArguments(format!("usage: {}", usage))),
        }
    }
}

pub fn balance_line(balance: f64, currency: &str, low: bool) -> String {
    let text = format!("Balance: {}", format_amount(balance, currency));
    if low {
        format!("{} {}", LOW_BALANCE_MARKER, text)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_line_flags_low_balances() {
        assert_eq!(balance_line(83.0, "CZK", false), "Balance: 83.00,- CZK");
        assert_eq!(
            balance_line(-5.0, "CZK", true),
            "⚠️ Balance: -5.00,- CZK"
        );
    }
}
