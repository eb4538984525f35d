use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::cli::core::CommandError;
use crate::cli::output;

/// Print a neutral status line, such as the balance or a history entry.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning, used for low balances and unknown commands.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error for a rejected command. The shell keeps running.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print confirmation that a ledger change was saved.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Prompt the user for free-form text, such as a missing top-up amount.
/// An empty answer is returned as-is and rejected later by amount parsing.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CommandError::from)
}
