//! Expense service
//!
//! Owns the in-memory expense collection and keeps it in step with the
//! repository. Every mutation works on the latest collection, then mirrors
//! it into the local cache. Each operation returns a [`Notification`]
//! describing how it went.
//!
//! After a failed load the collection is not trusted: mutations are refused
//! so the unreadable cache is never overwritten.

use std::io::Write;

use crate::display::Notification;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{parse_expenses, write_expenses};
use crate::models::{Expense, ExpenseId, NewExpense};
use crate::storage::{ExpenseRepository, Tiered};

use super::filter::ExpenseFilter;
use super::import::{new_records, ImportOutcome};

const OFFLINE_LOAD: &str = "Offline mode: showing locally cached expenses";

/// Service for expense management
pub struct ExpenseService {
    repository: ExpenseRepository,
    expenses: Vec<Expense>,
    load_failed: bool,
}

impl ExpenseService {
    /// Create a service with an empty collection; call [`load`](Self::load)
    /// before use
    pub fn new(repository: ExpenseRepository) -> Self {
        Self {
            repository,
            expenses: Vec::new(),
            load_failed: false,
        }
    }

    /// Load the collection from the repository
    ///
    /// Returns a notification only when something is worth telling the user:
    /// offline mode, or a failed load (which leaves the collection empty).
    pub fn load(&mut self) -> Option<Notification> {
        match self.repository.load() {
            Tiered::Remote(expenses) => {
                tracing::debug!(count = expenses.len(), "loaded expenses from remote store");
                self.expenses = expenses;
                self.load_failed = false;
                None
            }
            Tiered::Fallback(expenses) => {
                tracing::debug!(count = expenses.len(), "loaded expenses from local cache");
                self.expenses = expenses;
                self.load_failed = false;
                if self.repository.has_remote() {
                    Some(Notification::warning(OFFLINE_LOAD))
                } else {
                    None
                }
            }
            Tiered::Failed(reason) => {
                tracing::error!(%reason, "failed to load expenses");
                self.expenses.clear();
                self.load_failed = true;
                Some(Notification::error(format!("Failed to load expenses: {}", reason)))
            }
        }
    }

    /// True when the last load failed and mutations are refused
    pub fn is_read_only(&self) -> bool {
        self.load_failed
    }

    fn ensure_writable(&self) -> ExpenseResult<()> {
        if self.load_failed {
            return Err(ExpenseError::Storage(
                "Expenses could not be loaded; not modifying the unreadable local cache".into(),
            ));
        }
        Ok(())
    }

    /// All expenses, in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Look up an expense by id
    pub fn find(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// Expenses matching the filter
    pub fn filter(&self, criteria: &ExpenseFilter) -> Vec<Expense> {
        criteria.apply(&self.expenses)
    }

    /// Record a new expense
    pub fn add(&mut self, input: NewExpense) -> ExpenseResult<(Expense, Notification)> {
        self.ensure_writable()?;
        input
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let outcome = self.repository.add(input);
        let degraded = outcome.is_degraded() && self.repository.has_remote();
        let expense = match outcome.value() {
            Some(expense) => expense,
            None => return Err(ExpenseError::Storage("Failed to add expense".into())),
        };

        self.expenses.push(expense.clone());
        self.repository.mirror(&self.expenses);
        tracing::info!(id = %expense.id, "expense added");

        let notification = if degraded {
            Notification::warning("Expense saved locally (offline mode)")
        } else {
            Notification::success("Expense added successfully")
        };
        Ok((expense, notification))
    }

    /// Delete an expense by id
    pub fn delete(&mut self, id: &ExpenseId) -> ExpenseResult<Notification> {
        self.ensure_writable()?;
        let index = self
            .expenses
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.as_str()))?;

        let degraded = self.repository.delete(id).is_degraded() && self.repository.has_remote();
        self.expenses.remove(index);
        self.repository.mirror(&self.expenses);
        tracing::info!(%id, "expense deleted");

        Ok(if degraded {
            Notification::warning("Expense deleted locally (offline mode)")
        } else {
            Notification::success("Expense deleted successfully")
        })
    }

    /// Import expenses from JSON text
    ///
    /// The whole batch is rejected if it is malformed. Records whose id is
    /// already present are skipped.
    pub fn import_json(&mut self, json: &str) -> ExpenseResult<(ImportOutcome, Notification)> {
        self.ensure_writable()?;
        let incoming = parse_expenses(json)?;
        let fresh = new_records(&self.expenses, incoming);

        if fresh.is_empty() {
            return Ok((
                ImportOutcome::NothingNew,
                Notification::info("No new expenses to import"),
            ));
        }

        let outcome = self.repository.import_many(&fresh);
        let degraded = outcome.is_degraded() && self.repository.has_remote();
        // The remote reports what it actually inserted; it may already hold some ids
        let count = match outcome {
            Tiered::Remote(inserted) => inserted,
            _ => fresh.len(),
        };
        self.expenses.extend(fresh);
        self.repository.mirror(&self.expenses);
        tracing::info!(count, "expenses imported");

        if count == 0 {
            return Ok((
                ImportOutcome::NothingNew,
                Notification::info("No new expenses to import"),
            ));
        }

        let message = format!("Imported {} expenses successfully", count);
        let notification = if degraded {
            Notification::warning(format!("{} (saved locally, offline mode)", message))
        } else {
            Notification::success(message)
        };
        Ok((ImportOutcome::Imported(count), notification))
    }

    /// Write the full persisted state as JSON
    pub fn export_json<W: Write>(&self, writer: &mut W) -> ExpenseResult<(usize, Notification)> {
        let outcome = self.repository.export_all();
        let degraded = outcome.is_degraded() && self.repository.has_remote();
        let expenses = match outcome {
            Tiered::Remote(expenses) | Tiered::Fallback(expenses) => expenses,
            Tiered::Failed(reason) => {
                return Err(ExpenseError::Export(format!("Failed to export expenses: {}", reason)))
            }
        };

        write_expenses(&expenses, writer)?;

        let notification = if degraded {
            Notification::warning(format!(
                "Exported {} expenses from the local cache (offline mode)",
                expenses.len()
            ))
        } else {
            Notification::success(format!("Exported {} expenses", expenses.len()))
        };
        Ok((expenses.len(), notification))
    }

    /// Release storage at shutdown
    pub fn close(self) -> ExpenseResult<()> {
        self.repository.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::NotificationKind;
    use crate::models::Money;
    use crate::storage::repository::tests::UnreachableStore;
    use crate::storage::{JsonFileStore, LocalCache, RemoteStore};
    use tempfile::TempDir;

    fn cache_in(temp_dir: &TempDir) -> LocalCache {
        LocalCache::at(temp_dir.path().join("data").join("expenses.json"))
    }

    fn offline_service(temp_dir: &TempDir) -> ExpenseService {
        let mut service = ExpenseService::new(ExpenseRepository::offline(cache_in(temp_dir)));
        assert_eq!(service.load(), None);
        service
    }

    fn lunch() -> NewExpense {
        NewExpense::new(Money::from_units(100), "Food & Dining", "lunch", "2024-01-10")
    }

    #[test]
    fn test_add_and_persist() {
        let temp_dir = TempDir::new().unwrap();
        let mut service = offline_service(&temp_dir);

        let (expense, note) = service.add(lunch()).unwrap();
        assert_eq!(note, Notification::success("Expense added successfully"));
        assert_eq!(service.expenses().len(), 1);
        assert_eq!(service.find(&expense.id), Some(&expense));

        // A fresh service over the same cache sees the expense
        let reloaded = offline_service(&temp_dir);
        assert_eq!(reloaded.expenses(), &[expense]);
    }

    #[test]
    fn test_add_rejects_invalid_entry() {
        let temp_dir = TempDir::new().unwrap();
        let mut service = offline_service(&temp_dir);

        let err = service
            .add(NewExpense::new(Money::from_units(5), "", "", "2024-01-10"))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(service.expenses().is_empty());
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let mut service = offline_service(&temp_dir);
        let (expense, _) = service.add(lunch()).unwrap();

        let note = service.delete(&expense.id).unwrap();
        assert_eq!(note.kind, NotificationKind::Success);
        assert!(service.expenses().is_empty());

        let err = service.delete(&expense.id).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_offline_with_unreachable_remote() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(Some(Box::new(UnreachableStore)), cache_in(&temp_dir));
        let mut service = ExpenseService::new(repo);

        let note = service.load().unwrap();
        assert_eq!(note.kind, NotificationKind::Warning);

        let (expense, note) = service.add(lunch()).unwrap();
        assert!(note.is_problem());
        assert!(!expense.id.as_str().is_empty());
        assert_eq!(cache_in(&temp_dir).read().unwrap(), Some(vec![expense]));
    }

    #[test]
    fn test_remote_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let remote_path = temp_dir.path().join("remote.json");
        let repo = ExpenseRepository::new(
            Some(Box::new(JsonFileStore::new(remote_path.clone()))),
            cache_in(&temp_dir),
        );
        let mut service = ExpenseService::new(repo);
        assert_eq!(service.load(), None);

        let (expense, note) = service.add(lunch()).unwrap();
        assert_eq!(note.kind, NotificationKind::Success);

        let remote = JsonFileStore::new(remote_path);
        assert_eq!(remote.load().unwrap(), vec![expense]);
    }

    #[test]
    fn test_import_skips_known_ids() {
        let temp_dir = TempDir::new().unwrap();
        let mut service = offline_service(&temp_dir);
        service.add(lunch()).unwrap();

        let mut buffer = Vec::new();
        let (count, _) = service.export_json(&mut buffer).unwrap();
        assert_eq!(count, 1);
        let exported = String::from_utf8(buffer).unwrap();

        // Re-importing our own export adds nothing
        let (outcome, note) = service.import_json(&exported).unwrap();
        assert_eq!(outcome, ImportOutcome::NothingNew);
        assert_eq!(note, Notification::info("No new expenses to import"));

        // Into an empty collection, the export restores everything
        let other_dir = TempDir::new().unwrap();
        let mut other = offline_service(&other_dir);
        let (outcome, note) = other.import_json(&exported).unwrap();
        assert_eq!(outcome, ImportOutcome::Imported(1));
        assert_eq!(note.message, "Imported 1 expenses successfully");
        assert_eq!(other.expenses(), service.expenses());
    }

    #[test]
    fn test_import_rejects_malformed_batch() {
        let temp_dir = TempDir::new().unwrap();
        let mut service = offline_service(&temp_dir);

        let result = service.import_json(r#"{"id": "1"}"#);
        assert!(matches!(result, Err(ExpenseError::Import(_))));

        let batch = r#"[{"id": "1", "amount": 5, "date": "2024-01-01"}, {"id": "2"}]"#;
        let result = service.import_json(batch);
        assert!(matches!(result, Err(ExpenseError::Import(_))));
        assert!(service.expenses().is_empty());
    }

    #[test]
    fn test_failed_load_keeps_unreadable_cache() {
        let temp_dir = TempDir::new().unwrap();
        let cache = cache_in(&temp_dir);
        std::fs::create_dir_all(cache.path().parent().unwrap()).unwrap();
        let corrupt = r#"[{"id": "keep", "amount": 5, "date": "2024-01-01"},]"#;
        std::fs::write(cache.path(), corrupt).unwrap();

        let mut service = ExpenseService::new(ExpenseRepository::offline(cache_in(&temp_dir)));
        let note = service.load().unwrap();
        assert_eq!(note.kind, NotificationKind::Error);
        assert!(service.is_read_only());

        let err = service.add(lunch()).unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
        assert!(service.delete(&ExpenseId::from("keep")).is_err());
        assert!(service.import_json("[]").is_err());
        assert!(service.expenses().is_empty());

        assert_eq!(std::fs::read_to_string(cache.path()).unwrap(), corrupt);
    }

    #[test]
    fn test_import_reports_remote_inserted_count() {
        let temp_dir = TempDir::new().unwrap();
        let remote_path = temp_dir.path().join("remote.json");
        let repo = ExpenseRepository::new(
            Some(Box::new(JsonFileStore::new(remote_path.clone()))),
            cache_in(&temp_dir),
        );
        let mut service = ExpenseService::new(repo);
        assert_eq!(service.load(), None);

        // The remote gains a record this service has not loaded
        let known = Expense::new("a", Money::from_units(1), "Other", "", "2024-01-01");
        JsonFileStore::new(remote_path).import_many(&[known]).unwrap();

        let batch = r#"[
            {"id": "a", "amount": 1, "date": "2024-01-01"},
            {"id": "b", "amount": 2, "date": "2024-01-02"}
        ]"#;
        let (outcome, note) = service.import_json(batch).unwrap();
        assert_eq!(outcome, ImportOutcome::Imported(1));
        assert_eq!(note.message, "Imported 1 expenses successfully");
    }

    #[test]
    fn test_filter_uses_latest_collection() {
        let temp_dir = TempDir::new().unwrap();
        let mut service = offline_service(&temp_dir);
        service.add(lunch()).unwrap();
        service
            .add(NewExpense::new(Money::from_units(50), "Shopping", "shoes", "2024-01-12"))
            .unwrap();

        let found = service.filter(&ExpenseFilter::new().search("SHOE"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description, "shoes");
    }
}
