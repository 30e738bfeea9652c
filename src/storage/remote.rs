//! Remote store boundary
//!
//! The remote store owns the authoritative copy of the expenses. Any of its
//! operations may fail; the repository decides what to do about it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, NewExpense};

use super::file_io::{read_json, write_json_atomic};

/// Operations offered by a remote expense store
pub trait RemoteStore {
    /// Fetch every stored expense
    fn load(&self) -> ExpenseResult<Vec<Expense>>;

    /// Persist a new expense, returning it with its assigned id
    fn add(&self, expense: NewExpense) -> ExpenseResult<Expense>;

    /// Delete by id; `Ok(false)` when the store did not confirm the deletion
    fn delete(&self, id: &ExpenseId) -> ExpenseResult<bool>;

    /// Insert the expenses whose id is not stored yet, returning how many
    /// were inserted
    fn import_many(&self, expenses: &[Expense]) -> ExpenseResult<usize>;

    /// The full stored state, for export
    fn export_all(&self) -> ExpenseResult<Vec<Expense>>;
}

/// A remote store kept in a JSON file, typically on a synced or network
/// mounted directory
///
/// The store counts as unreachable while its directory does not exist.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_reachable(&self) -> ExpenseResult<()> {
        let reachable = self
            .path
            .parent()
            .map(|dir| dir.as_os_str().is_empty() || dir.is_dir())
            .unwrap_or(false);

        if reachable {
            Ok(())
        } else {
            Err(ExpenseError::Remote(format!(
                "store not reachable at {}",
                self.path.display()
            )))
        }
    }

    fn read_all(&self) -> ExpenseResult<Vec<Expense>> {
        self.ensure_reachable()?;
        read_json(&self.path).map_err(|e| ExpenseError::Remote(e.to_string()))
    }

    fn write_all(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        self.ensure_reachable()?;
        write_json_atomic(&self.path, expenses).map_err(|e| ExpenseError::Remote(e.to_string()))
    }
}

impl RemoteStore for JsonFileStore {
    fn load(&self) -> ExpenseResult<Vec<Expense>> {
        self.read_all()
    }

    fn add(&self, expense: NewExpense) -> ExpenseResult<Expense> {
        let mut expenses = self.read_all()?;
        let created = expense.with_id(ExpenseId::generate());
        expenses.push(created.clone());
        self.write_all(&expenses)?;
        Ok(created)
    }

    fn delete(&self, id: &ExpenseId) -> ExpenseResult<bool> {
        let mut expenses = self.read_all()?;
        let before = expenses.len();
        expenses.retain(|e| &e.id != id);
        if expenses.len() == before {
            return Ok(false);
        }
        self.write_all(&expenses)?;
        Ok(true)
    }

    fn import_many(&self, incoming: &[Expense]) -> ExpenseResult<usize> {
        let mut expenses = self.read_all()?;
        let mut known: HashSet<ExpenseId> = expenses.iter().map(|e| e.id.clone()).collect();

        let before = expenses.len();
        for expense in incoming {
            if known.insert(expense.id.clone()) {
                expenses.push(expense.clone());
            }
        }

        let inserted = expenses.len() - before;
        if inserted > 0 {
            self.write_all(&expenses)?;
        }
        Ok(inserted)
    }

    fn export_all(&self) -> ExpenseResult<Vec<Expense>> {
        self.read_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn new_expense(description: &str) -> NewExpense {
        NewExpense::new(Money::from_units(20), "Travel", description, "2024-05-01")
    }

    #[test]
    fn test_add_assigns_id_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("expenses.json"));

        assert!(store.load().unwrap().is_empty());

        let created = store.add(new_expense("train")).unwrap();
        assert!(!created.id.as_str().is_empty());
        assert_eq!(store.load().unwrap(), vec![created]);
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("expenses.json"));
        let created = store.add(new_expense("train")).unwrap();

        assert!(!store.delete(&ExpenseId::from("missing")).unwrap());
        assert!(store.delete(&created.id).unwrap());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_import_many_skips_known_ids() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("expenses.json"));

        let batch = vec![
            Expense::new("a", Money::from_units(1), "Travel", "", "2024-05-01"),
            Expense::new("b", Money::from_units(2), "Travel", "", "2024-05-02"),
        ];

        assert_eq!(store.import_many(&batch).unwrap(), 2);
        assert_eq!(store.import_many(&batch).unwrap(), 0);
        assert_eq!(store.export_all().unwrap(), batch);
    }

    #[test]
    fn test_unreachable_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("offline").join("expenses.json"));

        assert!(matches!(store.load(), Err(ExpenseError::Remote(_))));
        assert!(matches!(store.add(new_expense("bus")), Err(ExpenseError::Remote(_))));
        assert!(!temp_dir.path().join("offline").exists());
    }
}
