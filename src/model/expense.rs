use crate::model::{Amount, Category};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The date format used for the `date` field of an expense, e.g. `2024-01-15`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded expense.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Expense {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) amount: Amount,
    pub(crate) category: Category,
    /// Kept as the literal string that was entered or stored. See `Expense::parsed_date`.
    pub(crate) date: String,
}

impl Expense {
    /// Creates an expense from its parts. `id` is assigned by the caller, normally the `Store`.
    pub(crate) fn with_id(id: impl Into<String>, new: NewExpense) -> Self {
        Self {
            id: id.into(),
            title: new.title,
            amount: new.amount,
            category: new.category,
            date: new.date,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
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

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Parses the `date` string. Returns `None` if it is not a valid `YYYY-MM-DD` date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Overwrites the fields that are `Some` in `updates`. Nothing is validated.
    pub(crate) fn apply(&mut self, updates: ExpenseUpdates) {
        let ExpenseUpdates {
            title,
            amount,
            category,
            date,
        } = updates;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(amount) = amount {
            self.amount = amount;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(date) = date {
            self.date = date;
        }
    }
}

/// The data needed to record an expense. The id is never supplied by the caller.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewExpense {
    pub title: String,
    pub amount: Amount,
    pub category: Category,
    pub date: String,
}

impl NewExpense {
    pub fn new(
        title: impl Into<String>,
        amount: Amount,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            category,
            date: date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// A partial update of an expense. Fields that are `None` are left as they are.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExpenseUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ExpenseUpdates {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.amount.is_none() && self.category.is_none() && self.date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn coffee() -> Expense {
        Expense::with_id(
            "1",
            NewExpense::new(
                "Coffee",
                Amount::from_str("5").unwrap(),
                Category::Food,
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            ),
        )
    }

    #[test]
    fn test_new_expense_formats_date() {
        let e = coffee();
        assert_eq!(e.date(), "2024-01-10");
        assert_eq!(e.parsed_date(), NaiveDate::from_ymd_opt(2024, 1, 10));
    }

    #[test]
    fn test_parsed_date_tolerates_garbage() {
        let mut e = coffee();
        e.date = "last tuesday".to_string();
        assert_eq!(e.parsed_date(), None);
    }

    #[test]
    fn test_apply_only_touches_given_fields() {
        let mut e = coffee();
        e.apply(ExpenseUpdates {
            amount: Some(Amount::from_str("7.25").unwrap()),
            ..Default::default()
        });
        assert_eq!(e.amount(), Amount::from_str("7.25").unwrap());
        assert_eq!(e.id(), "1");
        assert_eq!(e.title(), "Coffee");
        assert_eq!(e.category(), &Category::Food);
        assert_eq!(e.date(), "2024-01-10");
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(coffee()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "title": "Coffee",
                "amount": 5,
                "category": "Food",
                "date": "2024-01-10"
            })
        );
    }

    #[test]
    fn test_deserialize_ignores_field_order() {
        let e: Expense = serde_json::from_str(
            r#"{"date":"2024-01-10","category":"Food","amount":5.0,"title":"Coffee","id":"1"}"#,
        )
        .unwrap();
        assert_eq!(e, coffee());
    }

    #[test]
    fn test_updates_is_empty() {
        assert!(ExpenseUpdates::default().is_empty());
        let updates = ExpenseUpdates {
            title: Some("Tea".to_string()),
            ..Default::default()
        };
        assert!(!updates.is_empty());
    }
}
