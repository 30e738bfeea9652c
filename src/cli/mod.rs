//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod data;
pub mod expense;
pub mod report;

pub use data::{handle_export, handle_import};
pub use expense::{handle_add, handle_categories, handle_delete, handle_list, AddArgs, ListArgs};
pub use report::{handle_chart, handle_report, ReportArgs, WindowArg};

use crate::display::Notification;

/// Print a notification: problems to stderr, everything else to stdout
pub fn print_notification(notification: &Notification) {
    if notification.is_problem() {
        eprintln!("{}", notification);
    } else {
        println!("{}", notification);
    }
}
