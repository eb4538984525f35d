use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::{self, section, OutputPreferences};
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change preferences",
        "config [show | set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            show(context);
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => set(context, key, &value.join(" ")),
        _ => Err(CommandError::InvalidArguments(
            "usage: config [show | set <key> <value>]".into(),
        )),
    }
}

fn show(context: &ShellContext) {
    section("Configuration");
    let mut rows = context.config.entries();
    rows.push((
        "data file in use",
        context.manager.storage().location().display().to_string(),
    ));
    output::two_column(&rows);
    io::print_info(format!("Stored at {}", context.config_manager.path().display()));
}

fn set(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set(key, value)?;
    context.config_manager.save(&updated)?;
    context.config = updated;
    tracing::info!(key, value, "configuration updated");

    if key == "ui_color_enabled" {
        output::set_preferences(OutputPreferences {
            color_enabled: context.config.ui_color_enabled,
        });
    }
    io::print_success(format!("`{}` updated.", key));
    if key == "data_file" {
        io::print_info("The new data file is used from the next start.");
    }
    Ok(())
}
