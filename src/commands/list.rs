use crate::args::ListArgs;
use crate::commands::{plural, Out};
use crate::model::{Amount, Expense};
use crate::query::ListQuery;
use crate::{Config, Result};
use chrono::NaiveDate;

/// Lists the expenses that match `args` in the order it asks for.
pub async fn list(config: Config, args: ListArgs, today: NaiveDate) -> Result<Out<Vec<Expense>>> {
    let store = config.open_store(today)?;
    let query = ListQuery {
        search: args.search().map(str::to_string),
        category: args.category().cloned(),
        sort: args.sort(),
    };
    let found: Vec<Expense> = query
        .apply(store.expenses())
        .into_iter()
        .cloned()
        .collect();

    let total: Amount = found.iter().map(Expense::amount).sum();
    let mut message = table(&found);
    message.push_str(&format!(
        "{} {}, {} total",
        found.len(),
        plural(found.len(), "expense", "expenses"),
        total
    ));
    Ok(Out::new(message, found))
}

fn table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return String::new();
    }

    let id_width = expenses
        .iter()
        .map(|e| e.id().len())
        .max()
        .unwrap_or(0)
        .max(2);
    let mut out = String::new();
    out.push_str(&format!(
        "{:<id_width$}  {:<10}  {:<10}  {:>12}  TITLE\n",
        "ID", "DATE", "CATEGORY", "AMOUNT"
    ));
    for e in expenses {
        out.push_str(&format!(
            "{:<id_width$}  {:<10}  {:<10}  {:>12}  {}\n",
            e.id(),
            e.date(),
            e.category().name(),
            e.amount().to_string(),
            e.title()
        ));
    }
    out
}
