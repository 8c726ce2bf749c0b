use crate::args::AddArgs;
use crate::commands::Out;
use crate::model::{Expense, NewExpense};
use crate::{Config, Result};
use chrono::NaiveDate;
use tracing::info;

/// Records a new expense. The expense is dated `today` unless `args` carries a date.
pub async fn add(config: Config, args: AddArgs, today: NaiveDate) -> Result<Out<Expense>> {
    let mut store = config.open_store(today)?;
    let new = NewExpense::new(
        args.title(),
        args.amount(),
        args.category().clone(),
        args.date().unwrap_or(today),
    );

    let expense = store.add(new)?.clone();
    info!("Added expense '{}'", expense.id());
    let message = format!(
        "Added {} {} ({}) on {} with id {}",
        expense.title(),
        expense.amount(),
        expense.category(),
        expense.date(),
        expense.id()
    );
    Ok(Out::new(message, expense))
}
