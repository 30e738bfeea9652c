//! Expense filter and search
//!
//! Every criterion is optional and an absent criterion places no constraint
//! on the result. Empty category or search strings count as absent. All
//! present criteria must hold for an expense to be kept, and the result
//! keeps the input order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Expense, Money};

/// Criteria for the list view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseFilter {
    /// Exact category name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Earliest date, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Latest date, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Smallest amount, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<Money>,
    /// Largest amount, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<Money>,
    /// Case-insensitive substring of the description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl ExpenseFilter {
    /// Create a filter with no criteria
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date(start).end_date(end)
    }

    pub fn min_amount(mut self, amount: Money) -> Self {
        self.min_amount = Some(amount);
        self
    }

    pub fn max_amount(mut self, amount: Money) -> Self {
        self.max_amount = Some(amount);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// True when no criterion constrains the result
    pub fn is_empty(&self) -> bool {
        self.active_category().is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
            && self.active_search_term().is_none()
    }

    fn active_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    fn active_search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|t| !t.is_empty())
    }

    /// Check a single expense against every present criterion
    ///
    /// When a date bound is set, an expense whose date cannot be parsed
    /// does not match.
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = self.active_category() {
            if expense.category != category {
                return false;
            }
        }

        if self.start_date.is_some() || self.end_date.is_some() {
            let Some(date) = expense.parsed_date() else {
                tracing::warn!(
                    id = %expense.id,
                    date = %expense.date,
                    "expense has a malformed date, excluded by date filter"
                );
                return false;
            };
            if self.start_date.is_some_and(|start| date < start) {
                return false;
            }
            if self.end_date.is_some_and(|end| date > end) {
                return false;
            }
        }

        if self.min_amount.is_some_and(|min| expense.amount < min) {
            return false;
        }
        if self.max_amount.is_some_and(|max| expense.amount > max) {
            return false;
        }

        if let Some(term) = self.active_search_term() {
            if !expense
                .description
                .to_lowercase()
                .contains(&term.to_lowercase())
            {
                return false;
            }
        }

        true
    }

    /// Return the matching expenses in input order
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        expenses.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

/// Filter a collection with the given criteria
pub fn filter_expenses(expenses: &[Expense], criteria: &ExpenseFilter) -> Vec<Expense> {
    criteria.apply(expenses)
}
