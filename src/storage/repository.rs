//! Two-tier expense repository
//!
//! Tries the remote store first and falls back to the local cache for
//! reads, or to a local-only mutation for writes. Every operation reports
//! which tier served it through [`Tiered`], so callers can tell the user
//! when they are working offline.

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseId, NewExpense};

use super::cache::LocalCache;
use super::remote::RemoteStore;

/// Outcome of a repository operation
#[derive(Debug, Clone, PartialEq)]
pub enum Tiered<T> {
    /// Served by the remote store
    Remote(T),
    /// Remote unavailable; served locally
    Fallback(T),
    /// Neither tier could serve the request
    Failed(String),
}

impl<T> Tiered<T> {
    /// The value, if any tier produced one
    pub fn value(self) -> Option<T> {
        match self {
            Self::Remote(v) | Self::Fallback(v) => Some(v),
            Self::Failed(_) => None,
        }
    }

    /// True unless the remote store served the request
    pub fn is_degraded(&self) -> bool {
        !matches!(self, Self::Remote(_))
    }
}

/// Remote store with local cache fallback
pub struct ExpenseRepository {
    remote: Option<Box<dyn RemoteStore>>,
    cache: LocalCache,
}

impl ExpenseRepository {
    pub fn new(remote: Option<Box<dyn RemoteStore>>, cache: LocalCache) -> Self {
        Self { remote, cache }
    }

    /// Repository without a remote store; everything is served locally
    pub fn offline(cache: LocalCache) -> Self {
        Self::new(None, cache)
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Load the collection
    ///
    /// A cache miss yields an empty collection. Only an unreadable cache
    /// produces `Failed`.
    pub fn load(&self) -> Tiered<Vec<Expense>> {
        if let Some(remote) = &self.remote {
            match remote.load() {
                Ok(expenses) => {
                    self.mirror(&expenses);
                    return Tiered::Remote(expenses);
                }
                Err(e) => tracing::warn!(error = %e, "remote load failed, reading local cache"),
            }
        }

        match self.cache.read() {
            Ok(cached) => Tiered::Fallback(cached.unwrap_or_default()),
            Err(e) => Tiered::Failed(e.to_string()),
        }
    }

    /// Persist a new expense
    ///
    /// Without the remote store the expense gets a locally generated id.
    pub fn add(&self, expense: NewExpense) -> Tiered<Expense> {
        if let Some(remote) = &self.remote {
            match remote.add(expense.clone()) {
                Ok(created) => return Tiered::Remote(created),
                Err(e) => tracing::warn!(error = %e, "remote add failed, adding locally"),
            }
        }

        Tiered::Fallback(expense.with_id(ExpenseId::generate()))
    }

    /// Delete an expense; the local removal always goes ahead
    pub fn delete(&self, id: &ExpenseId) -> Tiered<()> {
        if let Some(remote) = &self.remote {
            match remote.delete(id) {
                Ok(true) => return Tiered::Remote(()),
                Ok(false) => tracing::warn!(%id, "remote did not confirm deletion, removing locally"),
                Err(e) => tracing::warn!(error = %e, %id, "remote delete failed, removing locally"),
            }
        }

        Tiered::Fallback(())
    }

    /// Import a batch that has already been deduplicated against the
    /// in-memory collection
    pub fn import_many(&self, expenses: &[Expense]) -> Tiered<usize> {
        if let Some(remote) = &self.remote {
            match remote.import_many(expenses) {
                Ok(count) => return Tiered::Remote(count),
                Err(e) => tracing::warn!(error = %e, "remote import failed, importing locally"),
            }
        }

        Tiered::Fallback(expenses.len())
    }

    /// The full persisted state
    pub fn export_all(&self) -> Tiered<Vec<Expense>> {
        if let Some(remote) = &self.remote {
            match remote.export_all() {
                Ok(expenses) => return Tiered::Remote(expenses),
                Err(e) => tracing::warn!(error = %e, "remote export failed, exporting local cache"),
            }
        }

        match self.cache.read() {
            Ok(cached) => Tiered::Fallback(cached.unwrap_or_default()),
            Err(e) => Tiered::Failed(e.to_string()),
        }
    }

    /// Mirror the collection into the local cache
    ///
    /// A failed mirror is logged; the caller's state is still valid.
    pub fn mirror(&self, expenses: &[Expense]) {
        if let Err(e) = self.cache.write(expenses) {
            tracing::warn!(error = %e, "failed to mirror expenses into the local cache");
        }
    }

    /// Release the cache at shutdown
    pub fn close(self) -> ExpenseResult<()> {
        self.cache.close()
    }
}
