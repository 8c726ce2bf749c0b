//! The demo records used when there is no usable stored data.

use crate::model::{Amount, Category, Expense, NewExpense};
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

/// Returns the six seed expenses, dated relative to `today`.
pub fn seed_expenses(today: NaiveDate) -> Vec<Expense> {
    let rows: [(&str, &str, i64, Category, u64); 6] = [
        ("1", "Grocery Shopping", 12050, Category::Food, 0),
        ("2", "Monthly Rent", 120000, Category::Rent, 0),
        ("3", "Uber to Work", 2400, Category::Transport, 1),
        ("4", "Netflix Subscription", 1599, Category::Bills, 5),
        ("5", "New Sneakers", 8500, Category::Shopping, 10),
        ("6", "Dentist Appointment", 15000, Category::Health, 15),
    ];

    rows.into_iter()
        .map(|(id, title, cents, category, days_ago)| {
            let date = today.checked_sub_days(Days::new(days_ago)).unwrap_or(today);
            let amount = Amount::new(Decimal::new(cents, 2));
            Expense::with_id(id, NewExpense::new(title, amount, category, date))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_shape() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        let seed = seed_expenses(today);
        assert_eq!(seed.len(), 6);

        let ids: HashSet<&str> = seed.iter().map(Expense::id).collect();
        assert_eq!(ids.len(), 6);

        let dates: Vec<&str> = seed.iter().map(Expense::date).collect();
        assert_eq!(
            dates,
            vec![
                "2024-03-03",
                "2024-03-03",
                "2024-03-02",
                "2024-02-27",
                "2024-02-22",
                "2024-02-17"
            ]
        );

        let categories: HashSet<&Category> = seed.iter().map(Expense::category).collect();
        assert_eq!(categories.len(), 6);
        assert!(seed.iter().all(|e| e.amount().is_positive()));
    }

    #[test]
    fn test_seed_amounts() {
        let seed = seed_expenses(NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
        assert_eq!(seed[0].amount().to_string(), "$120.50");
        assert_eq!(seed[1].amount().to_string(), "$1,200.00");
        assert_eq!(seed[3].amount().to_string(), "$15.99");
    }
}
