//! Core data models for the expense tracker

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{ExpenseCategory, OTHER_CATEGORY};
pub use expense::{parse_expense_date, Expense, ExpenseValidationError, NewExpense, DATE_FORMAT};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
