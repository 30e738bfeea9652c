//! CLI commands for JSON import and export

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_filename;
use crate::services::ExpenseService;

use super::print_notification;

/// Handle `export`
///
/// Writes to `expenses-YYYY-MM-DD.json` in the current directory unless an
/// output path is given. `-` writes to stdout.
pub fn handle_export(service: &ExpenseService, output: Option<PathBuf>) -> ExpenseResult<()> {
    let output = output.unwrap_or_else(|| PathBuf::from(export_filename(Local::now().date_naive())));

    if output == Path::new("-") {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        service.export_json(&mut handle)?;
        return Ok(());
    }

    let file = File::create(&output).map_err(|e| {
        ExpenseError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    let (_, notification) = service.export_json(&mut writer)?;
    writer.flush()?;

    print_notification(&notification);
    println!("Written to {}", output.display());
    Ok(())
}

/// Handle `import`
pub fn handle_import(service: &mut ExpenseService, path: &Path) -> ExpenseResult<()> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ExpenseError::Import(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let (_, notification) = service.import_json(&contents)?;
    print_notification(&notification);
    Ok(())
}
