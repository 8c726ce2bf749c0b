//! These structs provide the CLI interface for the expenses CLI.

use crate::model::{Amount, Category, DATE_FORMAT};
use crate::query::SortOrder;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing::level_filters::LevelFilter;

/// expenses: A command-line tool for tracking personal expenses.
///
/// Expenses are kept in a local data directory. Each one has a title, an amount, a category and a
/// date. The summary command shows totals for the current month and day, the category you spend
/// the most on, and breakdowns by category and by month for the last six months.
///
/// Run `expenses init` once to create the data directory. Until you add, edit or delete an
/// expense, a set of sample expenses is shown.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the data directory and initialize the configuration file.
    ///
    /// This is the first command you should run. By default the data directory is
    /// $HOME/expenses. Pass --expense-home or set EXPENSE_HOME to put it somewhere else.
    Init(InitArgs),
    /// Record a new expense.
    Add(AddArgs),
    /// Change one or more fields of an existing expense.
    Edit(EditArgs),
    /// Delete an expense.
    Delete(DeleteArgs),
    /// List expenses, optionally searching by title and filtering by category.
    List(ListArgs),
    /// Show the summary totals and the breakdowns by category and by month.
    Summary(SummaryArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, global = true, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where expense data and configuration is held. Defaults to ~/expenses
    #[arg(long, global = true, env = "EXPENSE_HOME", default_value_t = default_expense_home())]
    expense_home: DisplayPath,

    /// Print the output of the command as JSON.
    #[arg(long, global = true)]
    json: bool,
}

impl Common {
    pub fn new(log_level: LevelFilter, expense_home: PathBuf, json: bool) -> Self {
        Self {
            log_level,
            expense_home: expense_home.into(),
            json,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn expense_home(&self) -> &DisplayPath {
        &self.expense_home
    }

    pub fn json(&self) -> bool {
        self.json
    }
}

/// Args for the `expenses init` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct InitArgs {
    /// The key that the expense list is stored under. Defaults to expense-tracker-data
    #[arg(long)]
    storage_key: Option<String>,
}

impl InitArgs {
    pub fn new(storage_key: Option<String>) -> Self {
        Self { storage_key }
    }

    pub fn storage_key(&self) -> Option<&str> {
        self.storage_key.as_deref()
    }
}

/// Args for the `expenses add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// What the money was spent on.
    #[arg(long, value_parser = parse_title)]
    title: String,

    /// The amount spent. Must be greater than zero, e.g. 12.50
    #[arg(long, value_parser = parse_amount)]
    amount: Amount,

    /// One of: Food, Transport, Rent, Shopping, Bills, Education, Health, Other
    #[arg(long, default_value_t = Category::Other)]
    category: Category,

    /// The date of the expense as YYYY-MM-DD. Defaults to today.
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
}

impl AddArgs {
    pub fn new(
        title: impl Into<String>,
        amount: Amount,
        category: Category,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            category,
            date,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }
}

/// Args for the `expenses edit` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct EditArgs {
    /// The id of the expense to change.
    id: String,

    /// The new title.
    #[arg(long, value_parser = parse_title)]
    title: Option<String>,

    /// The new amount. Must be greater than zero.
    #[arg(long, value_parser = parse_amount)]
    amount: Option<Amount>,

    /// The new category.
    #[arg(long)]
    category: Option<Category>,

    /// The new date as YYYY-MM-DD.
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
}

impl EditArgs {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }
}

/// Args for the `expenses delete` command.
#[derive(Debug, Parser, Clone)]
pub struct DeleteArgs {
    /// The id of the expense to delete.
    id: String,
}

impl DeleteArgs {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Args for the `expenses list` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct ListArgs {
    /// Only show expenses whose title contains this text, ignoring case.
    #[arg(long)]
    search: Option<String>,

    /// Only show expenses in this category.
    #[arg(long)]
    category: Option<Category>,

    /// The order to show expenses in.
    #[arg(long, value_enum, default_value_t = SortOrder::DateDesc)]
    sort: SortOrder,
}

impl ListArgs {
    pub fn new(search: Option<String>, category: Option<Category>, sort: SortOrder) -> Self {
        Self {
            search,
            category,
            sort,
        }
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }
}

/// Args for the `expenses summary` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct SummaryArgs {
    /// Compute the summary as if today were this date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    as_of: Option<NaiveDate>,
}

impl SummaryArgs {
    pub fn new(as_of: Option<NaiveDate>) -> Self {
        Self { as_of }
    }

    pub fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }
}

fn parse_title(s: &str) -> Result<String, String> {
    let title = s.trim();
    if title.is_empty() {
        return Err("the title cannot be empty".to_string());
    }
    Ok(title.to_string())
}

fn parse_amount(s: &str) -> Result<Amount, String> {
    let amount = Amount::from_str(s).map_err(|e| e.to_string())?;
    if !amount.is_positive() {
        return Err(format!("the amount must be greater than zero, got {amount}"));
    }
    Ok(amount)
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| format!("expected a date like 2024-01-31: {e}"))
}

fn default_expense_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("expenses"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --expense-home or EXPENSE_HOME instead of relying on the default \
                home directory. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from("expenses")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
