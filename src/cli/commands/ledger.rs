use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::ledger::format_amount;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("balance", "Show the current balance", "balance", cmd_balance),
        CommandEntry::new(
            "buy",
            "Buy a coffee at the default price",
            "buy",
            cmd_buy,
        )
        .with_aliases(&["coffee"]),
        CommandEntry::new(
            "undo-buy",
            "Remove the most recent coffee purchase",
            "undo-buy",
            cmd_undo_buy,
        )
        .with_aliases(&["undo-coffee"]),
        CommandEntry::new(
            "topup",
            "Add money to the budget",
            "topup <amount>",
            cmd_topup,
        )
        .with_aliases(&["top-up"]),
        CommandEntry::new(
            "undo-topup",
            "Remove the most recent top-up",
            "undo-topup",
            cmd_undo_topup,
        ),
        CommandEntry::new(
            "price",
            "Show or change the default coffee price",
            "price [<amount>]",
            cmd_price,
        ),
    ]
}

fn cmd_balance(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.print_balance();
    Ok(())
}

fn cmd_buy(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let purchase = context.manager.buy_coffee()?;
    io::print_success(format!(
        "Coffee bought for {}.",
        format_amount(purchase.price, context.currency())
    ));
    context.print_balance();
    Ok(())
}

fn cmd_undo_buy(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.manager.undo_last_purchase()? {
        Some(purchase) => io::print_success(format!(
            "Removed coffee from {} ({}).",
            purchase.date,
            format_amount(purchase.price, context.currency())
        )),
        None => io::print_info("No coffee purchases to undo."),
    }
    context.print_balance();
    Ok(())
}

fn cmd_topup(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    ensure_at_most_one(args, "topup <amount>")?;
    let text = context.arg_or_prompt(args, "Top-up amount", "topup <amount>")?;
    let top_up = context.manager.add_top_up(&text)?;
    io::print_success(format!(
        "Top-up of {} added.",
        format_amount(top_up.amount, context.currency())
    ));
    context.print_balance();
    Ok(())
}

fn cmd_undo_topup(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.manager.undo_last_top_up()? {
        Some(top_up) => io::print_success(format!(
            "Removed top-up from {} ({}).",
            top_up.date,
            format_amount(top_up.amount, context.currency())
        )),
        None => io::print_info("No top-ups to undo."),
    }
    context.print_balance();
    Ok(())
}

fn cmd_price(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    ensure_at_most_one(args, "price [<amount>]")?;
    let Some(text) = args.first() else {
        io::print_info(format!(
            "Default coffee price: {}",
            format_amount(context.manager.default_price(), context.currency())
        ));
        return Ok(());
    };
    let previous = context.manager.set_default_price(text)?;
    io::print_success(format!(
        "Coffee price updated from {} to {}.",
        format_amount(previous, context.currency()),
        format_amount(context.manager.default_price(), context.currency())
    ));
    Ok(())
}

fn ensure_at_most_one(args: &[&str], usage: &str) -> Result<(), CommandError> {
    if args.len() > 1 {
        return Err(CommandError::InvalidArguments(format!("usage: {}", usage)));
    }
    Ok(())
}
