//! Configuration module for the expense tracker
//!
//! - Path resolution for settings, cache and the default remote store
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
