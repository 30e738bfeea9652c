//! JSON import/export format
//!
//! A file is a UTF-8 JSON array of expense objects (`id`, `amount`,
//! `category`, `description`, `date`). Import accepts nothing else: any other
//! top-level shape, or any record that does not parse, rejects the whole
//! file.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, DATE_FORMAT};

/// File name for an export made on `date`
pub fn export_filename(date: NaiveDate) -> String {
    format!("expenses-{}.json", date.format(DATE_FORMAT))
}

/// Write expenses as a pretty-printed JSON array
pub fn write_expenses<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    serde_json::to_writer_pretty(&mut *writer, expenses)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

/// Parse an import file
pub fn parse_expenses(json_str: &str) -> ExpenseResult<Vec<Expense>> {
    let value: serde_json::Value = serde_json::from_str(json_str).map_err(|e| {
        ExpenseError::Import(format!(
            "Failed to parse the imported file. Make sure it's a valid JSON file: {}",
            e
        ))
    })?;

    let serde_json::Value::Array(records) = value else {
        return Err(ExpenseError::Import(
            "Invalid data format: expected a JSON array of expenses".into(),
        ));
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record).map_err(|e| {
                ExpenseError::Import(format!("Invalid expense at position {}: {}", index + 1, e))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(export_filename(date), "expenses-2024-01-05.json");
    }

    #[test]
    fn test_written_file_parses_back() {
        let expenses = vec![
            Expense::new("1", Money::from_units(100), "Food & Dining", "lunch", "2024-01-10"),
            Expense::new("2", Money::from_cents(4950), "Shopping", "shoes", "2024-01-12"),
        ];

        let mut buffer = Vec::new();
        write_expenses(&expenses, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.trim_start().starts_with('['));
        assert_eq!(parse_expenses(&text).unwrap(), expenses);
    }

    #[test]
    fn test_rejects_non_array() {
        let err = parse_expenses(r#"{"expenses": []}"#).unwrap_err();
        assert!(err.to_string().contains("expected a JSON array"));
    }

    #[test]
    fn test_rejects_invalid_json() {
        assert!(matches!(parse_expenses("[{"), Err(ExpenseError::Import(_))));
    }

    #[test]
    fn test_one_bad_record_rejects_the_batch() {
        let json = r#"[
            {"id": "1", "amount": 10, "category": "Travel", "description": "", "date": "2024-01-01"},
            {"id": "2", "category": "Travel", "description": "", "date": "2024-01-02"}
        ]"#;
        let err = parse_expenses(json).unwrap_err();
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn test_non_numeric_amount_is_rejected() {
        let json = r#"[{"id": "1", "amount": "ten", "category": "Travel", "description": "", "date": "2024-01-01"}]"#;
        assert!(parse_expenses(json).is_err());
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_expenses("[]").unwrap().is_empty());
    }
}
