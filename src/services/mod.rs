//! Service layer
//!
//! Business logic on top of the storage layer: the expense collection and
//! its mutations, the filter evaluator, and import merging.

pub mod expense;
pub mod filter;
pub mod import;

pub use expense::ExpenseService;
pub use filter::{filter_expenses, ExpenseFilter};
pub use import::{new_records, ImportOutcome};
