use std::path::PathBuf;

use crate::cli::chart::{render_monthly_chart, DEFAULT_BAR_WIDTH};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::CommandEntry;
use crate::errors::LedgerError;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Chart coffee spending per month",
            "summary",
            cmd_summary,
        )
        .with_aliases(&["stats"]),
        CommandEntry::new(
            "export",
            "Export the full history to a CSV file",
            "export <file.csv>",
            cmd_export,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let rows = context.manager.monthly_spending();
    if rows.is_empty() {
        io::print_info("No coffee data to plot.");
        return Ok(());
    }
    section(format!("Monthly Coffee Spending ({})", context.currency()));
    for line in render_monthly_chart(&rows, DEFAULT_BAR_WIDTH) {
        io::print_info(line);
    }
    Ok(())
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() > 1 {
        return Err(CommandError::InvalidArguments(
            "usage: export <file.csv>".into(),
        ));
    }
    let destination = match context.arg_or_prompt(args, "Save CSV export to", "export <file.csv>")
    {
        Ok(path) => path,
        Err(CommandError::InvalidArguments(_)) => {
            return Err(LedgerError::Export("no destination given; export cancelled".into()).into())
        }
        Err(err) => return Err(err),
    };
    let path = with_csv_extension(PathBuf::from(destination.trim()));
    context.manager.export_csv(&path)?;
    io::print_success(format!("History exported to {}.", path.display()));
    Ok(())
}

/// Appends `.csv` when the user typed a bare file name.
fn with_csv_extension(mut path: PathBuf) -> PathBuf {
    if !path.as_os_str().is_empty() && path.extension().is_none() {
        path.set_extension("csv");
    }
    path
}
