//! Expense model
//!
//! The expense is the only entity. Its date is kept as the ISO-8601 string
//! it was recorded with; date-based operations parse it on demand and skip
//! records whose date does not parse.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Date format of the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique, never reassigned
    pub id: ExpenseId,

    /// Amount spent
    pub amount: Money,

    /// Category name; any string is accepted
    #[serde(default)]
    pub category: String,

    /// Free text, may be empty
    #[serde(default)]
    pub description: String,

    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
}

impl Expense {
    pub fn new(
        id: impl Into<ExpenseId>,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            category: category.into(),
            description: description.into(),
            date: date.into(),
        }
    }

    /// The calendar date of this expense, if the date string is valid
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_expense_date(&self.date)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.amount, self.category, self.description
        )
    }
}

/// Parse an expense date
///
/// Accepts `YYYY-MM-DD`, optionally followed by a `T` time component which
/// is ignored.
pub fn parse_expense_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let date_part = match s.split_once('T') {
        Some((date, _)) => date,
        None => s,
    };
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

/// An expense before an id has been assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: Money,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
}

impl NewExpense {
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
            date: date.into(),
        }
    }

    /// Check the entry rules: category and a valid date are required and the
    /// amount may not be negative.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::MissingCategory);
        }
        if parse_expense_date(&self.date).is_none() {
            return Err(ExpenseValidationError::InvalidDate(self.date.clone()));
        }
        Ok(())
    }

    /// Attach an id, producing a full expense
    pub fn with_id(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
        }
    }
}

/// Validation errors for new expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount,
    MissingCategory,
    InvalidDate(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Amount cannot be negative"),
            Self::MissingCategory => write!(f, "Category is required"),
            Self::InvalidDate(d) => write!(f, "Invalid date '{}', expected YYYY-MM-DD", d),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
