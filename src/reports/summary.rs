//! Period summary report
//!
//! For each reporting window: the total spent and the categories with the
//! largest totals.

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::display::CurrencyFormat;
use crate::models::{Expense, Money};

use super::grouping::group_by_category;
use super::totals::total;
use super::window::TimeWindow;

/// A category and its summed amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Money,
}

/// Summary of one reporting window
#[derive(Debug, Clone)]
pub struct PeriodSummary {
    pub window: TimeWindow,
    /// Total spent in the window
    pub total: Money,
    /// Number of expenses in the window
    pub expense_count: usize,
    /// Highest-spending categories, largest first
    pub top_categories: Vec<CategoryTotal>,
}

impl PeriodSummary {
    /// Summarize one window for the given reference date
    pub fn generate(
        expenses: &[Expense],
        window: TimeWindow,
        today: NaiveDate,
        top_n: usize,
    ) -> Self {
        let selected = window.select_on(expenses, today);

        Self {
            window,
            total: total(&selected),
            expense_count: selected.len(),
            top_categories: top_categories(&selected, top_n),
        }
    }

    /// Format this summary for terminal display
    pub fn format_terminal(&self, currency: &CurrencyFormat) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", self.window.title()));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Total: {} ({} expense{})\n\n",
            currency.format(self.total),
            self.expense_count,
            if self.expense_count == 1 { "" } else { "s" }
        ));

        output.push_str("Top Categories\n");
        if self.top_categories.is_empty() {
            output.push_str("  No expenses recorded\n");
        } else {
            for entry in &self.top_categories {
                output.push_str(&format!(
                    "  {:<24} {:>14}\n",
                    entry.category,
                    currency.format(entry.amount)
                ));
            }
        }

        output
    }
}

/// Summaries for the daily, weekly and monthly windows
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub reference_date: NaiveDate,
    pub summaries: Vec<PeriodSummary>,
}

impl SummaryReport {
    /// Generate summaries for the requested windows around `now`
    pub fn generate<Tz: TimeZone>(
        expenses: &[Expense],
        windows: &[TimeWindow],
        now: &DateTime<Tz>,
        top_n: usize,
    ) -> Self {
        let today = now.date_naive();
        Self {
            reference_date: today,
            summaries: windows
                .iter()
                .map(|window| PeriodSummary::generate(expenses, *window, today, top_n))
                .collect(),
        }
    }

    pub fn get(&self, window: TimeWindow) -> Option<&PeriodSummary> {
        self.summaries.iter().find(|s| s.window == window)
    }

    pub fn format_terminal(&self, currency: &CurrencyFormat) -> String {
        self.summaries
            .iter()
            .map(|s| s.format_terminal(currency))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Categories ranked by total, largest first, at most `limit` entries
///
/// Equal totals are ordered by category name.
pub fn top_categories(expenses: &[Expense], limit: usize) -> Vec<CategoryTotal> {
    let mut ranked: Vec<CategoryTotal> = group_by_category(expenses)
        .into_iter()
        .map(|(category, amount)| CategoryTotal { category, amount })
        .collect();

    ranked.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));
    ranked.truncate(limit);
    ranked
}
