//! Totals

use crate::models::{Expense, Money};

/// Sum of all amounts; zero for an empty collection
///
/// No rounding happens here.
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}
