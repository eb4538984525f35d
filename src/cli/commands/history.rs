use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::CommandEntry;
use crate::ledger::format_amount;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "history",
        "List top-ups and coffee purchases, newest first",
        "history [topups|coffees]",
        cmd_history,
    )]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryKind {
    TopUps,
    Coffees,
}

fn parse_kind(arg: &str) -> Result<HistoryKind, CommandError> {
    match arg.to_ascii_lowercase().as_str() {
        "topups" | "top-ups" | "topup" => Ok(HistoryKind::TopUps),
        "coffees" | "coffee" | "purchases" => Ok(HistoryKind::Coffees),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown history `{}` (use `topups` or `coffees`)",
            other
        ))),
    }
}

fn cmd_history(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kinds = match args {
        [] => vec![HistoryKind::TopUps, HistoryKind::Coffees],
        [kind] => vec![parse_kind(kind)?],
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: history [topups|coffees]".into(),
            ))
        }
    };
    for kind in kinds {
        print_history(context, kind);
    }
    Ok(())
}

fn print_history(context: &ShellContext, kind: HistoryKind) {
    let currency = context.currency();
    let (title, empty, lines): (&str, &str, Vec<String>) = match kind {
        HistoryKind::TopUps => (
            "Top-Up History",
            "No top-ups yet.",
            context
                .manager
                .top_ups()
                .iter()
                .rev()
                .map(|t| format!("{}: {}", t.date, format_amount(t.amount, currency)))
                .collect(),
        ),
        HistoryKind::Coffees => (
            "Coffee Purchase History",
            "No coffees bought yet.",
            context
                .manager
                .purchases()
                .iter()
                .rev()
                .map(|p| format!("{}: {}", p.date, format_amount(p.price, currency)))
                .collect(),
        ),
    };

    section(title);
    if lines.is_empty() {
        io::print_info(empty);
    }
    for line in lines {
        io::print_info(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_spellings() {
        assert_eq!(parse_kind("TopUps").unwrap(), HistoryKind::TopUps);
        assert_eq!(parse_kind("purchases").unwrap(), HistoryKind::Coffees);
        assert!(parse_kind("tea").is_err());
    }
}
