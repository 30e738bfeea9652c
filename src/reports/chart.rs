//! Chart data
//!
//! Prepares the two chart series shown under the reports: the share of each
//! category in total spending, and total spending per day over the last week.

use chrono::{Days, NaiveDate};

use crate::display::CurrencyFormat;
use crate::models::{Expense, Money, DATE_FORMAT};

use super::grouping::{group_by_category, group_by_date};
use super::totals::total;

/// Width of the longest bar in the text rendering
const BAR_WIDTH: usize = 30;

/// A category slice of the spending chart
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Percentage of the grand total (0 when the total is zero)
    pub percentage: f64,
}

/// Total spending on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub amount: Money,
}

/// Both chart series
#[derive(Debug, Clone)]
pub struct ChartData {
    pub categories: Vec<CategoryShare>,
    pub daily: Vec<DailyPoint>,
}

impl ChartData {
    /// Build the chart series for the given reference date
    pub fn generate(expenses: &[Expense], today: NaiveDate) -> Self {
        Self {
            categories: category_shares(expenses),
            daily: daily_series(expenses, today, 7),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Render both series as text bar charts
    pub fn format_terminal(&self, currency: &CurrencyFormat) -> String {
        if self.is_empty() {
            return "No data to visualize. Add some expenses to see charts.\n".to_string();
        }

        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');
        let max = self.categories.iter().map(|c| c.amount).max().unwrap_or_default();
        for share in &self.categories {
            output.push_str(&format!(
                "{:<16} {:<width$} {:>5.1}% {}\n",
                share.category,
                bar(share.amount, max),
                share.percentage,
                currency.format(share.amount),
                width = BAR_WIDTH
            ));
        }

        output.push_str("\nDaily Spending (Last 7 Days)\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');
        let max = self.daily.iter().map(|p| p.amount).max().unwrap_or_default();
        for point in &self.daily {
            output.push_str(&format!(
                "{} {:<width$} {}\n",
                point.date.format("%b %d"),
                bar(point.amount, max),
                currency.format(point.amount),
                width = BAR_WIDTH
            ));
        }

        output
    }
}

/// Category totals with their share of the grand total, largest first
pub fn category_shares(expenses: &[Expense]) -> Vec<CategoryShare> {
    let grand_total = total(expenses);

    let mut shares: Vec<CategoryShare> = group_by_category(expenses)
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            percentage: percentage_of(amount, grand_total),
            category,
            amount,
        })
        .collect();

    shares.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));
    shares
}

/// Spending per day from `today - days` through `today`, inclusive
///
/// Days without expenses are present with a zero amount, so the series
/// always has `days + 1` points in chronological order.
pub fn daily_series(expenses: &[Expense], today: NaiveDate, days: u64) -> Vec<DailyPoint> {
    let groups = group_by_date(expenses);

    (0..=days)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| {
            let key = date.format(DATE_FORMAT).to_string();
            let amount = groups.get(&key).map(|day| total(day)).unwrap_or_default();
            DailyPoint { date, amount }
        })
        .collect()
}

fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}

fn bar(amount: Money, max: Money) -> String {
    if max.cents() <= 0 || amount.cents() <= 0 {
        return String::new();
    }
    let len = (amount.cents() as f64 / max.cents() as f64 * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.max(1))
}
