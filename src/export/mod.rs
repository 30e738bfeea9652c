//! Import/export file format

pub mod json;

pub use json::{export_filename, parse_expenses, write_expenses};
