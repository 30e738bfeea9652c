//! Expense CLI commands
//!
//! Implements the add, list, delete and categories commands.

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list, CurrencyFormat};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseCategory, ExpenseId, Money, NewExpense, DATE_FORMAT};
use crate::services::{ExpenseFilter, ExpenseService};

use super::print_notification;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g., "25000" or "12.50")
    pub amount: String,
    /// Category name; suggested names (see `expenses categories`) are matched
    /// case-insensitively and stored in their usual spelling
    pub category: String,
    /// Description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only this category (exact, case-sensitive match)
    #[arg(short = 'C', long)]
    pub category: Option<String>,
    /// Start date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub from: Option<String>,
    /// End date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: Option<String>,
    /// Minimum amount, inclusive
    #[arg(long)]
    pub min: Option<String>,
    /// Maximum amount, inclusive
    #[arg(long)]
    pub max: Option<String>,
    /// Case-insensitive text to find in descriptions
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Handle `add`
pub fn handle_add(
    service: &mut ExpenseService,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let amount = parse_amount(&args.amount)?;
    let date = match args.date {
        Some(date) => date,
        None => Local::now().date_naive().format(DATE_FORMAT).to_string(),
    };

    let input = NewExpense::new(
        amount,
        canonical_category(&args.category),
        args.description.unwrap_or_default(),
        date,
    );

    let (expense, notification) = service.add(input)?;
    print_notification(&notification);
    print!(
        "{}",
        format_expense_details(
            &expense,
            &CurrencyFormat::from(settings),
            &settings.display_date_format
        )
    );
    Ok(())
}

/// Handle `list`
pub fn handle_list(
    service: &ExpenseService,
    settings: &Settings,
    args: ListArgs,
) -> ExpenseResult<()> {
    let criteria = build_filter(args)?;
    let expenses = service.filter(&criteria);

    print!(
        "{}",
        format_expense_list(
            &expenses,
            &CurrencyFormat::from(settings),
            &settings.display_date_format
        )
    );
    Ok(())
}

/// Handle `delete`
pub fn handle_delete(service: &mut ExpenseService, id: &str) -> ExpenseResult<()> {
    let notification = service.delete(&ExpenseId::from(id))?;
    print_notification(&notification);
    Ok(())
}

/// Handle `categories`
pub fn handle_categories() {
    println!("Categories:");
    for category in ExpenseCategory::all() {
        println!("  {}", category);
    }
}

fn build_filter(args: ListArgs) -> ExpenseResult<ExpenseFilter> {
    let mut filter = ExpenseFilter::new();

    if let Some(category) = args.category {
        filter = filter.category(category);
    }
    if let Some(from) = args.from {
        filter = filter.start_date(parse_date(&from)?);
    }
    if let Some(to) = args.to {
        filter = filter.end_date(parse_date(&to)?);
    }
    if let Some(min) = args.min {
        filter = filter.min_amount(parse_amount(&min)?);
    }
    if let Some(max) = args.max {
        filter = filter.max_amount(parse_amount(&max)?);
    }
    if let Some(term) = args.search {
        filter = filter.search(term);
    }

    Ok(filter)
}

/// Known category names are normalized to their usual spelling; anything
/// else is kept as typed
fn canonical_category(name: &str) -> String {
    match ExpenseCategory::from_name(name) {
        Some(category) => category.name().to_string(),
        None => name.trim().to_string(),
    }
}

fn parse_amount(s: &str) -> ExpenseResult<Money> {
    Money::parse(s).map_err(|e| ExpenseError::Validation(e.to_string()))
}

fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| ExpenseError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}
