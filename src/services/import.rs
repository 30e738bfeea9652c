//! Import merge
//!
//! Decides which records of an import batch are new. Records whose id is
//! already in the collection, or repeated earlier in the same batch, are
//! skipped silently.

use std::collections::HashSet;

use crate::models::{Expense, ExpenseId};

/// Result of an import that was not rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// This many new expenses were added
    Imported(usize),
    /// Every record was already present
    NothingNew,
}

/// Records of `incoming` whose id is not in `existing`, in batch order
pub fn new_records(existing: &[Expense], incoming: Vec<Expense>) -> Vec<Expense> {
    let mut seen: HashSet<ExpenseId> = existing.iter().map(|e| e.id.clone()).collect();
    incoming
        .into_iter()
        .filter(|e| seen.insert(e.id.clone()))
        .collect()
}
