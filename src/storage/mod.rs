//! Storage layer
//!
//! Atomic JSON file I/O, the local cache, the remote store boundary and the
//! repository that combines them.

pub mod cache;
pub mod file_io;
pub mod remote;
pub mod repository;

pub use cache::{LocalCache, EXPENSES_KEY};
pub use file_io::{read_json, read_json_optional, write_json_atomic};
pub use remote::{JsonFileStore, RemoteStore};
pub use repository::{ExpenseRepository, Tiered};

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;

/// Build the repository described by the settings
///
/// Without a configured remote store the repository works offline.
pub fn open_repository(paths: &ExpensePaths, settings: &Settings) -> ExpenseResult<ExpenseRepository> {
    let cache = LocalCache::open(paths)?;
    let remote: Option<Box<dyn RemoteStore>> = settings
        .remote_store
        .as_ref()
        .map(|path| Box::new(JsonFileStore::new(path.clone())) as Box<dyn RemoteStore>);

    Ok(ExpenseRepository::new(remote, cache))
}
