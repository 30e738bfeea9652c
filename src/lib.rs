//! Expense Tracker - personal expense tracking from the terminal
//!
//! This library provides the core of the expense tracker: recording
//! expenses, summarizing spending over daily, weekly and monthly windows,
//! filtering, and JSON import/export. Expenses are persisted to a remote
//! store when one is configured, with a local cache as fallback.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The expense model, money and ids
//! - `reports`: Time windows, grouping, totals and charts
//! - `services`: Business logic layer
//! - `storage`: Local cache, remote store and repository
//! - `export`: JSON import/export format
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::open_repository;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut service = ExpenseService::new(open_repository(&paths, &settings)?);
//! service.load();
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};

static TRACING_INIT: Once = Once::new();

/// Install the stderr log subscriber once per process
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output when `verbose` is set.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let default = if verbose {
            "expense_tracker=debug"
        } else {
            "expense_tracker=warn"
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
