//! Searching, filtering and sorting the expense list for display.

use crate::model::{Category, Expense};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The order in which listed expenses are shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Newest first.
    #[default]
    DateDesc,
    /// Oldest first.
    DateAsc,
    /// Highest amount first.
    AmountDesc,
    /// Lowest amount first.
    AmountAsc,
}

serde_plain::derive_display_from_serialize!(SortOrder);
serde_plain::derive_fromstr_from_deserialize!(SortOrder);

/// Selects and orders expenses the way the list view shows them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Case-insensitive substring that the title must contain.
    pub search: Option<String>,
    /// Only show expenses in this category. `None` shows all categories.
    pub category: Option<Category>,
    pub sort: SortOrder,
}

impl ListQuery {
    /// Returns the matching expenses in the requested order. The sort is stable, so expenses that
    /// compare equal keep their order from the list.
    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut matches: Vec<&Expense> = expenses
            .iter()
            .filter(|e| match &needle {
                Some(needle) => e.title().to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .filter(|e| match &self.category {
                Some(category) => e.category() == category,
                None => true,
            })
            .collect();

        matches.sort_by(|a, b| self.compare(a, b));
        matches
    }

    fn compare(&self, a: &Expense, b: &Expense) -> Ordering {
        // Unparseable dates are `None`, which sorts as the oldest.
        match self.sort {
            SortOrder::DateDesc => b.parsed_date().cmp(&a.parsed_date()),
            SortOrder::DateAsc => a.parsed_date().cmp(&b.parsed_date()),
            SortOrder::AmountDesc => b.amount().cmp(&a.amount()),
            SortOrder::AmountAsc => a.amount().cmp(&b.amount()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, NewExpense};
    use std::str::FromStr;

    fn expense(id: &str, title: &str, amount: &str, category: Category, date: &str) -> Expense {
        Expense::with_id(
            id,
            NewExpense {
                title: title.to_string(),
                amount: Amount::from_str(amount).unwrap(),
                category,
                date: date.to_string(),
            },
        )
    }

    fn expenses() -> Vec<Expense> {
        vec![
            expense("a", "Morning Coffee", "4.50", Category::Food, "2024-01-10"),
            expense("b", "Rent", "1000", Category::Rent, "2024-01-01"),
            expense("c", "Coffee beans", "18", Category::Food, "2024-01-12"),
            expense("d", "Bus pass", "60", Category::Transport, "unknown"),
        ]
    }

    fn ids(found: &[&Expense]) -> Vec<String> {
        found.iter().map(|e| e.id().to_string()).collect()
    }

    #[test]
    fn test_default_is_newest_first() {
        let list = expenses();
        let found = ListQuery::default().apply(&list);
        assert_eq!(ids(&found), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_date_ascending_puts_bad_dates_first() {
        let list = expenses();
        let query = ListQuery {
            sort: SortOrder::DateAsc,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&list)), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_amount_orders() {
        let list = expenses();
        let desc = ListQuery {
            sort: SortOrder::AmountDesc,
            ..Default::default()
        };
        assert_eq!(ids(&desc.apply(&list)), vec!["b", "d", "c", "a"]);
        let asc = ListQuery {
            sort: SortOrder::AmountAsc,
            ..Default::default()
        };
        assert_eq!(ids(&asc.apply(&list)), vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let list = expenses();
        let query = ListQuery {
            search: Some("COFFEE".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&list)), vec!["c", "a"]);
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let list = expenses();
        let query = ListQuery {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.apply(&list).len(), 4);
    }

    #[test]
    fn test_category_and_search_combine() {
        let list = expenses();
        let query = ListQuery {
            search: Some("coffee".to_string()),
            category: Some(Category::Rent),
            sort: SortOrder::DateDesc,
        };
        assert!(query.apply(&list).is_empty());

        let query = ListQuery {
            category: Some(Category::Food),
            sort: SortOrder::AmountAsc,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&list)), vec!["a", "c"]);
    }

    #[test]
    fn test_sort_order_strings() {
        assert_eq!(SortOrder::AmountDesc.to_string(), "amount-desc");
        assert_eq!(SortOrder::from_str("date-asc").unwrap(), SortOrder::DateAsc);
        assert!(SortOrder::from_str("newest").is_err());
    }
}
