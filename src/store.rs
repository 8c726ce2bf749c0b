//! The `Store` owns the list of expenses and keeps it in sync with a `Storage` facility.

use crate::model::{seed_expenses, Expense, ExpenseUpdates, NewExpense};
use crate::report::{self, CategoryData, ExpenseSummary, MonthlyData};
use crate::storage::Storage;
use crate::utils::generate_expense_id;
use crate::Result;
use anyhow::Context;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Holds the ordered list of expenses, newest first, along with the storage it is persisted to.
///
/// Every mutation rewrites the full list to storage under the store's key. Summaries are not
/// cached; they are computed from the list each time they are requested.
#[derive(Debug, Clone)]
pub struct Store<S>
where
    S: Storage,
{
    storage: S,
    key: String,
    expenses: Vec<Expense>,
    seeded: bool,
}

impl<S> Store<S>
where
    S: Storage,
{
    /// Loads the expense list stored under `key`.
    ///
    /// This never fails. If nothing is stored under `key`, or the stored value cannot be read or
    /// decoded, the store starts with the seed list dated relative to `today`. Nothing is written
    /// until the first mutation.
    pub fn load(storage: S, key: impl Into<String>, today: NaiveDate) -> Self {
        let key = key.into();
        let loaded = match storage.get(&key) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Expense>>(&json) {
                Ok(expenses) => {
                    debug!("Loaded {} expenses from '{key}'", expenses.len());
                    Some(expenses)
                }
                Err(e) => {
                    warn!("Unable to decode the expenses stored under '{key}', using seed data: {e}");
                    None
                }
            },
            Ok(None) => {
                debug!("Nothing is stored under '{key}', using seed data");
                None
            }
            Err(e) => {
                warn!("Unable to read the expenses stored under '{key}', using seed data: {e:#}");
                None
            }
        };

        let seeded = loaded.is_none();
        Self {
            storage,
            key,
            expenses: loaded.unwrap_or_else(|| seed_expenses(today)),
            seeded,
        }
    }

    /// Writes the full list to storage.
    pub fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.expenses).context("Unable to serialize expenses")?;
        self.storage
            .set(&self.key, &json)
            .with_context(|| format!("Unable to save expenses under '{}'", self.key))?;
        debug!("Saved {} expenses to '{}'", self.expenses.len(), self.key);
        Ok(())
    }

    /// Records a new expense under a freshly generated id, places it first in the list and
    /// persists. Returns the stored record.
    pub fn add(&mut self, new: NewExpense) -> Result<&Expense> {
        let id = self.unused_id();
        debug!("Adding expense '{id}'");
        self.expenses.insert(0, Expense::with_id(id, new));
        self.save()?;
        Ok(&self.expenses[0])
    }

    /// Applies `updates` to the expense with `id` and persists.
    ///
    /// Returns `Ok(None)`, without writing anything, if no expense has that id.
    pub fn edit(&mut self, id: &str, updates: ExpenseUpdates) -> Result<Option<&Expense>> {
        let mut first = None;
        for (ix, expense) in self.expenses.iter_mut().enumerate() {
            if expense.id == id {
                expense.apply(updates.clone());
                first.get_or_insert(ix);
            }
        }
        let Some(ix) = first else {
            debug!("No expense with id '{id}' to edit");
            return Ok(None);
        };
        self.save()?;
        Ok(self.expenses.get(ix))
    }

    /// Removes the expense with `id` and persists.
    ///
    /// Returns `Ok(None)`, without writing anything, if no expense has that id.
    pub fn remove(&mut self, id: &str) -> Result<Option<Expense>> {
        let (removed, kept): (Vec<Expense>, Vec<Expense>) = std::mem::take(&mut self.expenses)
            .into_iter()
            .partition(|e| e.id == id);
        self.expenses = kept;
        if removed.is_empty() {
            debug!("No expense with id '{id}' to remove");
            return Ok(None);
        }
        if removed.len() > 1 {
            warn!("Removed {} expenses that shared the id '{id}'", removed.len());
        }
        self.save()?;
        Ok(removed.into_iter().next())
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// True when the list came from the seed data rather than from storage.
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub fn summary(&self, today: NaiveDate) -> ExpenseSummary {
        report::summarize(&self.expenses, today)
    }

    pub fn by_category(&self) -> Vec<CategoryData> {
        report::by_category(&self.expenses)
    }

    pub fn by_month(&self, today: NaiveDate) -> Vec<MonthlyData> {
        report::by_month(&self.expenses, today)
    }

    fn unused_id(&self) -> String {
        loop {
            let id = generate_expense_id();
            if self.get(&id).is_none() {
                return id;
            }
            warn!("Generated id '{id}' is already in use, generating another");
        }
    }
}
