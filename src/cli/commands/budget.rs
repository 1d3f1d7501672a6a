use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::table::{Alignment, Table, TableColumn};

const NAME_COLUMN_WIDTH: usize = 32;

pub(super) fn income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            match context.session.income() {
                Some(income) => output::info(format!("Income: {}", context.format_amount(income))),
                None => output::info("No income set."),
            }
            Ok(())
        }
        ["clear"] => {
            context.session.clear_income();
            output::success("Income cleared.");
            Ok(())
        }
        [text] => {
            match context.session.set_income(text)? {
                Some(income) => output::success(format!(
                    "Income set to {}.",
                    context.format_amount(income)
                )),
                None => output::success("Income cleared."),
            }
            print_summary(context);
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: income <amount>|clear".into(),
        )),
    }
}

/// Raw tokens go straight to the ledger so validation happens at its boundary;
/// missing arguments surface as empty-input errors.
pub(super) fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (name, amount) = match args {
        [] => (String::new(), ""),
        [name] => (name.to_string(), ""),
        [name_parts @ .., amount] => (name_parts.join(" "), *amount),
    };
    context.session.add_expense(&name, amount)?;
    output::success(format!("Added `{}`.", name.trim()));
    render_ledger(context);
    Ok(())
}

pub(super) fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [position] = args else {
        return Err(CommandError::InvalidArguments("usage: remove <n>".into()));
    };
    let position: usize = position.parse().map_err(|_| {
        CommandError::InvalidArguments(format!("`{}` is not a list position", position))
    })?;

    let removed = position
        .checked_sub(1)
        .and_then(|index| context.session.remove_expense(index));
    match removed {
        Some(entry) => {
            output::success(format!("Removed `{}`.", entry.name.trim()));
            render_ledger(context);
        }
        None => output::warning(format!("No expense at position {}.", position)),
    }
    Ok(())
}

pub(super) fn list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    render_ledger(context);
    Ok(())
}

pub(super) fn summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    print_summary(context);
    Ok(())
}

/// Re-renders the expense table and totals after every mutation.
pub(crate) fn render_ledger(context: &ShellContext) {
    let ledger = context.session.ledger();
    output::section("Expenses");
    if ledger.is_empty() {
        output::info("No expenses yet. Use `add <name> <amount>`.");
        return;
    }

    let mut table = Table::new(vec![
        TableColumn::new("#", Alignment::Right),
        TableColumn::new("Expense", Alignment::Left).max_width(NAME_COLUMN_WIDTH),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Share", Alignment::Right),
    ]);
    for (idx, share) in ledger.percentages().iter().enumerate() {
        table.rows.push(vec![
            (idx + 1).to_string(),
            share.entry.name.clone(),
            context.format_amount(share.entry.amount),
            format!("{}%", share.display_percentage()),
        ]);
    }
    table.footer.push(vec![
        String::new(),
        "Total".into(),
        context.format_amount(ledger.total()),
        "100%".into(),
    ]);
    output::info(table.render());
    print_summary(context);
}

fn print_summary(context: &ShellContext) {
    let summary = context.session.summary();
    output::info(format!(
        "Total expenses : {}",
        context.format_amount(summary.total)
    ));
    if let (Some(income), Some(remaining)) = (summary.income, summary.remaining) {
        output::info(format!("Income         : {}", context.format_amount(income)));
        output::info(format!(
            "Remaining      : {}",
            context.format_amount(remaining)
        ));
        if remaining < 0.0 {
            output::warning("Expenses exceed income.");
        }
    }
}
