//! Time-window selection
//!
//! Picks the expenses that fall into the daily, weekly or monthly window
//! relative to a reference instant. The instant is always passed in; nothing
//! here reads the clock.
//!
//! The weekly and monthly windows are rolling and exclude their boundary
//! day: with a 7-day window an expense dated exactly 7 days before the
//! reference date is left out, one dated 6 days before is kept. Dates after
//! the reference date fall inside the rolling windows.

use chrono::{DateTime, Days, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Expense;

/// A reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    /// Same calendar day as the reference date
    Daily,
    /// Rolling 7 days, boundary day excluded
    Weekly,
    /// Rolling 30 days, boundary day excluded
    Monthly,
}

impl TimeWindow {
    pub fn all() -> &'static [Self] {
        &[Self::Daily, Self::Weekly, Self::Monthly]
    }

    /// Length of the rolling window in days (`None` for the daily window)
    pub fn rolling_days(&self) -> Option<u64> {
        match self {
            Self::Daily => None,
            Self::Weekly => Some(7),
            Self::Monthly => Some(30),
        }
    }

    /// Heading used in summaries
    pub fn title(&self) -> &'static str {
        match self {
            Self::Daily => "Today's Spending",
            Self::Weekly => "Last 7 Days",
            Self::Monthly => "Last 30 Days",
        }
    }

    /// Check whether a calendar date falls into this window
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.rolling_days() {
            None => date == today,
            Some(days) => match today.checked_sub_days(Days::new(days)) {
                Some(cutoff) => date > cutoff,
                // Reference date too close to the calendar's lower limit
                None => true,
            },
        }
    }

    /// Select the expenses falling into this window, keeping input order
    ///
    /// Expenses with an unparseable date are skipped and logged.
    pub fn select_on(&self, expenses: &[Expense], today: NaiveDate) -> Vec<Expense> {
        expenses
            .iter()
            .filter(|expense| match expense.parsed_date() {
                Some(date) => self.contains(date, today),
                None => {
                    tracing::warn!(
                        id = %expense.id,
                        date = %expense.date,
                        window = %self,
                        "expense has a malformed date, excluded from window"
                    );
                    false
                }
            })
            .cloned()
            .collect()
    }

    /// Select the expenses falling into this window around `now`
    ///
    /// The calendar date is taken in the time zone `now` carries.
    pub fn select<Tz: TimeZone>(&self, expenses: &[Expense], now: &DateTime<Tz>) -> Vec<Expense> {
        self.select_on(expenses, now.date_naive())
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

/// Expenses dated on the same calendar day as `now`
pub fn daily_subset<Tz: TimeZone>(expenses: &[Expense], now: &DateTime<Tz>) -> Vec<Expense> {
    TimeWindow::Daily.select(expenses, now)
}

/// Expenses dated strictly after `now` minus 7 days
pub fn weekly_subset<Tz: TimeZone>(expenses: &[Expense], now: &DateTime<Tz>) -> Vec<Expense> {
    TimeWindow::Weekly.select(expenses, now)
}

/// Expenses dated strictly after `now` minus 30 days
pub fn monthly_subset<Tz: TimeZone>(expenses: &[Expense], now: &DateTime<Tz>) -> Vec<Expense> {
    TimeWindow::Monthly.select(expenses, now)
}
