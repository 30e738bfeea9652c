//! Date display formatting

use crate::models::parse_expense_date;

/// Default display format, e.g. "Jan 10, 2024"
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Render an ISO date string for display
///
/// Strings that don't parse are shown unchanged.
pub fn format_date(date: &str, format: &str) -> String {
    match parse_expense_date(date) {
        Some(parsed) => parsed.format(format).to_string(),
        None => date.to_string(),
    }
}

/// Render an ISO date string with the default display format
pub fn format_date_for_display(date: &str) -> String {
    format_date(date, DISPLAY_DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_for_display() {
        assert_eq!(format_date_for_display("2024-01-10"), "Jan 10, 2024");
        assert_eq!(format_date_for_display("2024-12-01"), "Dec 1, 2024");
    }

    #[test]
    fn test_invalid_date_passes_through() {
        assert_eq!(format_date_for_display("someday"), "someday");
    }

    #[test]
    fn test_custom_format() {
        assert_eq!(format_date("2024-01-10", "%d/%m/%Y"), "10/01/2024");
    }
}
