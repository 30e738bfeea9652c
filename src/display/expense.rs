//! Expense display formatting
//!
//! The list view shows the filtered expenses grouped by day, newest day
//! first, each day as a table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;
use crate::reports::{group_by_date, total};

use super::currency::CurrencyFormat;
use super::date::format_date;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, currency: &CurrencyFormat) -> Self {
        Self {
            id: expense.id.to_string(),
            category: expense.category.clone(),
            description: truncate(&expense.description, 40),
            amount: currency.format(expense.amount),
        }
    }
}

/// Render expenses as a single table
pub fn format_expense_table(expenses: &[Expense], currency: &CurrencyFormat) -> String {
    let rows = expenses.iter().map(|e| ExpenseRow::new(e, currency));
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}

/// "N expense(s) found"
pub fn format_found_count(count: usize) -> String {
    format!("{} expense{} found", count, if count == 1 { "" } else { "s" })
}

/// Render the list view: day headings, newest first, each with its total
///
/// Expenses whose date does not parse are listed last under their own
/// heading so they stay visible.
pub fn format_expense_list(
    expenses: &[Expense],
    currency: &CurrencyFormat,
    date_format: &str,
) -> String {
    let mut output = format_found_count(expenses.len());
    output.push('\n');

    if expenses.is_empty() {
        output.push_str("No expenses found. Try adjusting your filters or search term.\n");
        return output;
    }

    for (date, day) in group_by_date(expenses).iter().rev() {
        output.push('\n');
        output.push_str(&format!(
            "{}  ({})\n",
            format_date(date, date_format),
            currency.format(total(day))
        ));
        output.push_str(&format_expense_table(day, currency));
        output.push('\n');
    }

    let undated: Vec<Expense> = expenses
        .iter()
        .filter(|e| e.parsed_date().is_none())
        .cloned()
        .collect();
    if !undated.is_empty() {
        output.push_str("\nInvalid date\n");
        output.push_str(&format_expense_table(&undated, currency));
        output.push('\n');
    }

    output
}

/// Render one expense in detail
pub fn format_expense_details(
    expense: &Expense,
    currency: &CurrencyFormat,
    date_format: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", format_date(&expense.date, date_format)));
    output.push_str(&format!("Amount:      {}\n", currency.format(expense.amount)));
    output.push_str(&format!("Category:    {}\n", expense.category));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }
    output
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::date::DISPLAY_DATE_FORMAT;
    use crate::models::Money;

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new("1", Money::from_units(100), "Food & Dining", "lunch", "2024-01-10"),
            Expense::new("2", Money::from_units(50), "Shopping", "shoes", "2024-01-12"),
            Expense::new("3", Money::from_units(7), "Other", "mystery", "??"),
        ]
    }

    #[test]
    fn test_found_count() {
        assert_eq!(format_found_count(1), "1 expense found");
        assert_eq!(format_found_count(0), "0 expenses found");
    }

    #[test]
    fn test_list_newest_day_first() {
        let text = format_expense_list(&sample(), &CurrencyFormat::default(), DISPLAY_DATE_FORMAT);

        assert!(text.starts_with("3 expenses found"));
        let jan12 = text.find("Jan 12, 2024").unwrap();
        let jan10 = text.find("Jan 10, 2024").unwrap();
        let invalid = text.find("Invalid date").unwrap();
        assert!(jan12 < jan10);
        assert!(jan10 < invalid);
        assert!(text.contains("Rp 100"));
        assert!(text.contains("mystery"));
    }

    #[test]
    fn test_empty_list() {
        let text = format_expense_list(&[], &CurrencyFormat::default(), DISPLAY_DATE_FORMAT);
        assert!(text.contains("No expenses found"));
    }

    #[test]
    fn test_details() {
        let text = format_expense_details(&sample()[1], &CurrencyFormat::default(), DISPLAY_DATE_FORMAT);
        assert!(text.contains("Amount:      Rp 50"));
        assert!(text.contains("Description: shoes"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer description", 10), "a much ...");
    }
}
