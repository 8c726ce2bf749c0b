//! Derived views over a list of expenses: the summary totals, the per-category breakdown and the
//! trailing six month breakdown.
//!
//! Everything here is a pure function of the list and of the date that is considered "today".

use crate::model::{Amount, Category, Expense, DATE_FORMAT};
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// The number of month buckets returned by `by_month`, including the current month.
pub const MONTHS: u32 = 6;

/// Summary totals over a list of expenses.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct ExpenseSummary {
    /// The sum of all amounts.
    pub total: Amount,
    /// The sum of the amounts dated in the same month and year as today.
    pub monthly_total: Amount,
    /// The sum of the amounts whose date string is exactly today's date string.
    pub daily_total: Amount,
    /// The category with the largest positive total, if any.
    pub highest_category: Option<Category>,
    /// The total of `highest_category`, or zero.
    pub highest_category_amount: Amount,
}

/// The total spent in one category.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CategoryData {
    pub name: Category,
    pub value: Amount,
    pub color: String,
}

/// The total spent in one month, labeled by short month name, e.g. `Jan`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct MonthlyData {
    pub name: String,
    pub amount: Amount,
}

/// Computes the summary totals for `expenses` as of `today`.
pub fn summarize(expenses: &[Expense], today: NaiveDate) -> ExpenseSummary {
    let today_str = today.format(DATE_FORMAT).to_string();
    let mut summary = ExpenseSummary::default();

    for expense in expenses {
        let amount = expense.amount();
        summary.total += amount;

        if let Some(date) = expense.parsed_date() {
            if date.month() == today.month() && date.year() == today.year() {
                summary.monthly_total += amount;
            }
        }

        // Literal string comparison: a date stored in any other format never counts as today.
        if expense.date() == today_str {
            summary.daily_total += amount;
        }
    }

    // Strictly greater, so the first category (by first appearance) wins a tie, and a category
    // needs a positive total to be reported at all.
    for (category, amount) in category_totals(expenses) {
        if amount > summary.highest_category_amount {
            summary.highest_category_amount = amount;
            summary.highest_category = Some(category);
        }
    }

    summary
}

/// Computes the total per category for the categories present in `expenses`, largest first.
/// Categories with equal totals keep the order in which they first appear in the list.
pub fn by_category(expenses: &[Expense]) -> Vec<CategoryData> {
    let mut data: Vec<CategoryData> = category_totals(expenses)
        .into_iter()
        .map(|(name, value)| CategoryData {
            color: name.color().to_string(),
            name,
            value,
        })
        .collect();
    data.sort_by(|a, b| b.value.cmp(&a.value));
    data
}

/// Computes the totals for the current month and the five months before it, oldest first.
///
/// Buckets are matched by month name only, so an expense from the same month of an earlier year
/// is counted in that month's bucket. Expenses whose date cannot be parsed are left out.
pub fn by_month(expenses: &[Expense], today: NaiveDate) -> Vec<MonthlyData> {
    let mut buckets: Vec<MonthlyData> = trailing_months(today)
        .into_iter()
        .map(|month| MonthlyData {
            name: month_name(month),
            amount: Amount::ZERO,
        })
        .collect();

    for expense in expenses {
        let Some(date) = expense.parsed_date() else {
            continue;
        };
        let name = month_name(date);
        if let Some(bucket) = buckets.iter_mut().find(|b| b.name == name) {
            bucket.amount += expense.amount();
        }
    }

    buckets
}

/// Sums amounts per category, in the order each category first appears.
fn category_totals(expenses: &[Expense]) -> Vec<(Category, Amount)> {
    let mut totals: Vec<(Category, Amount)> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|(c, _)| c == expense.category()) {
            Some((_, total)) => *total += expense.amount(),
            None => totals.push((expense.category().clone(), expense.amount())),
        }
    }
    totals
}

/// Returns the first day of each of the `MONTHS` months ending with the month of `today`, oldest
/// first.
fn trailing_months(today: NaiveDate) -> Vec<NaiveDate> {
    let first = today.with_day(1).unwrap_or(today);
    (0..MONTHS)
        .rev()
        .filter_map(|back| first.checked_sub_months(Months::new(back)))
        .collect()
}

fn month_name(date: NaiveDate) -> String {
    date.format("%b").to_string()
}
