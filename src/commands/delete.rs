//! Delete command handler.

use crate::args::DeleteArgs;
use crate::commands::Out;
use crate::model::Expense;
use crate::{Config, Result};
use chrono::NaiveDate;
use tracing::info;

/// Deletes the expense with the id in `args`.
///
/// An unknown id is not an error: nothing is written and the message says so.
pub async fn delete(config: Config, args: DeleteArgs, today: NaiveDate) -> Result<Out<Expense>> {
    let mut store = config.open_store(today)?;
    let Some(removed) = store.remove(args.id())? else {
        return Ok(format!("No expense with id '{}' was found", args.id()).into());
    };

    info!("Deleted expense '{}'", removed.id());
    let message = format!(
        "Deleted {} {} ({}), {} expenses remain",
        removed.title(),
        removed.amount(),
        removed.date(),
        store.expenses().len()
    );
    Ok(Out::new(message, removed))
}
