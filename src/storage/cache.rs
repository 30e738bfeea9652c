//! Local cache of the expense collection
//!
//! A JSON file under the data directory, named after the storage key. It
//! mirrors every change to the in-memory collection and is read back only
//! when the remote store cannot be reached.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ExpensePaths;
use crate::error::ExpenseResult;
use crate::models::Expense;

use super::file_io::{read_json_optional, temp_path_for, write_json_atomic};

/// Storage key of the cached expense collection
pub const EXPENSES_KEY: &str = "expenses";

/// File-backed cache with an explicit open/close lifecycle
#[derive(Debug)]
pub struct LocalCache {
    path: PathBuf,
}

impl LocalCache {
    /// Open the cache at application startup
    pub fn open(paths: &ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;
        let cache = Self::at(paths.cache_file(EXPENSES_KEY));
        tracing::debug!(path = %cache.path.display(), "local cache opened");
        Ok(cache)
    }

    /// Use an explicit file (useful for testing)
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached collection; `None` when nothing has been cached yet
    pub fn read(&self) -> ExpenseResult<Option<Vec<Expense>>> {
        read_json_optional(&self.path)
    }

    /// Replace the cached collection
    pub fn write(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_json_atomic(&self.path, expenses)?;
        tracing::debug!(count = expenses.len(), "local cache updated");
        Ok(())
    }

    /// Close the cache at shutdown, removing any interrupted write
    pub fn close(self) -> ExpenseResult<()> {
        let temp = temp_path_for(&self.path);
        if temp.exists() {
            fs::remove_file(&temp)?;
        }
        tracing::debug!(path = %self.path.display(), "local cache closed");
        Ok(())
    }
}
