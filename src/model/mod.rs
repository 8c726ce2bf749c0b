//! Types that represent the core data model, such as `Expense`, `Amount` and `Category`.
mod amount;
mod category;
mod expense;
mod seed;

pub use amount::{Amount, AmountError};
pub use category::{Category, CategoryError, NEUTRAL_COLOR};
pub use expense::{Expense, ExpenseUpdates, NewExpense, DATE_FORMAT};
pub use seed::seed_expenses;
