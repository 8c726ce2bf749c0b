use crate::args::EditArgs;
use crate::commands::Out;
use crate::model::{Expense, ExpenseUpdates, DATE_FORMAT};
use crate::{Config, Result};
use anyhow::ensure;
use chrono::NaiveDate;
use tracing::info;

/// Changes the fields of the expense with the id in `args` that `args` carries.
///
/// An unknown id is not an error: nothing is written and the message says so.
///
/// # Errors
/// - Returns an error if `args` carries no fields to change, or if the list cannot be saved.
pub async fn edit(config: Config, args: EditArgs, today: NaiveDate) -> Result<Out<Expense>> {
    let updates = ExpenseUpdates {
        title: args.title().map(str::to_string),
        amount: args.amount(),
        category: args.category().cloned(),
        date: args.date().map(|d| d.format(DATE_FORMAT).to_string()),
    };
    ensure!(
        !updates.is_empty(),
        "Nothing to change, pass at least one of --title, --amount, --category or --date"
    );

    let mut store = config.open_store(today)?;
    let Some(expense) = store.edit(args.id(), updates)? else {
        return Ok(format!("No expense with id '{}' was found", args.id()).into());
    };

    info!("Updated expense '{}'", expense.id());
    let message = format!(
        "Updated {}: {} {} ({}) on {}",
        expense.id(),
        expense.title(),
        expense.amount(),
        expense.category(),
        expense.date()
    );
    Ok(Out::new(message, expense.clone()))
}
