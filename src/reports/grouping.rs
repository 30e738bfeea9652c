//! Grouping of expenses by date and by category
//!
//! Both groupings return new maps and leave the input untouched. `BTreeMap`
//! keeps the keys sorted, so the result does not depend on input order
//! beyond the order of expenses inside a date bucket.

use std::collections::BTreeMap;

use crate::models::{Expense, Money, DATE_FORMAT, OTHER_CATEGORY};

/// Expenses bucketed by `YYYY-MM-DD`
pub type DateGroups = BTreeMap<String, Vec<Expense>>;

/// Summed amounts per category name
pub type CategoryTotals = BTreeMap<String, Money>;

/// Group expenses by calendar date
///
/// Each bucket keeps the relative order the expenses had in the input.
/// Expenses whose date cannot be parsed are skipped and logged.
pub fn group_by_date(expenses: &[Expense]) -> DateGroups {
    let mut groups = DateGroups::new();

    for expense in expenses {
        let Some(date) = expense.parsed_date() else {
            tracing::warn!(
                id = %expense.id,
                date = %expense.date,
                "expense has a malformed date, left out of date grouping"
            );
            continue;
        };

        groups
            .entry(date.format(DATE_FORMAT).to_string())
            .or_default()
            .push(expense.clone());
    }

    groups
}

/// Sum amounts per category
///
/// An empty category counts toward `"Other"`.
pub fn group_by_category(expenses: &[Expense]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();

    for expense in expenses {
        let category = if expense.category.is_empty() {
            OTHER_CATEGORY
        } else {
            expense.category.as_str()
        };
        *totals.entry(category.to_string()).or_insert_with(Money::zero) += expense.amount;
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::totals::total;

    fn expense(id: &str, amount: i64, category: &str, date: &str) -> Expense {
        Expense::new(id, Money::from_units(amount), category, "", date)
    }

    #[test]
    fn test_group_by_date_is_stable() {
        let expenses = vec![
            expense("1", 5, "Travel", "2024-01-12"),
            expense("2", 7, "Travel", "2024-01-10"),
            expense("3", 9, "Travel", "2024-01-12"),
        ];

        let groups = group_by_date(&expenses);
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["2024-01-10", "2024-01-12"]);

        let ids: Vec<&str> = groups["2024-01-12"].iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_group_by_date_normalizes_keys() {
        let expenses = vec![expense("1", 5, "Travel", "2024-01-12T08:00:00Z")];
        let groups = group_by_date(&expenses);
        assert!(groups.contains_key("2024-01-12"));
    }

    #[test]
    fn test_group_by_date_skips_malformed_dates() {
        let expenses = vec![expense("1", 5, "Travel", "not a date")];
        assert!(group_by_date(&expenses).is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(group_by_date(&[]).is_empty());
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_empty_category_goes_to_other() {
        let totals = group_by_category(&[expense("1", 42, "", "2024-01-10")]);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[OTHER_CATEGORY], Money::from_units(42));
    }

    #[test]
    fn test_category_sums() {
        let expenses = vec![
            expense("1", 100, "Food & Dining", "2024-01-10"),
            expense("2", 50, "Shopping", "2024-01-12"),
            expense("3", 25, "Food & Dining", "2024-01-13"),
            expense("4", -5, "Other", "2024-01-13"),
            expense("5", 10, "", "2024-01-13"),
        ];

        let totals = group_by_category(&expenses);
        assert_eq!(totals["Food & Dining"], Money::from_units(125));
        assert_eq!(totals["Shopping"], Money::from_units(50));
        assert_eq!(totals["Other"], Money::from_units(5));

        let bucket_sum: Money = totals.values().sum();
        assert_eq!(bucket_sum, total(&expenses));
    }

    #[test]
    fn test_input_not_mutated() {
        let expenses = vec![expense("1", 100, "", "2024-01-10")];
        let before = expenses.clone();
        let _ = group_by_category(&expenses);
        let _ = group_by_date(&expenses);
        assert_eq!(expenses, before);
    }
}
