//! Reports
//!
//! Pure computations over an expense collection: time-window selection,
//! grouping by date and category, totals, period summaries and chart
//! series. Nothing here touches storage or the system clock; callers pass
//! the reference instant in.

pub mod chart;
pub mod grouping;
pub mod summary;
pub mod totals;
pub mod window;

pub use chart::{category_shares, daily_series, CategoryShare, ChartData, DailyPoint};
pub use grouping::{group_by_category, group_by_date, CategoryTotals, DateGroups};
pub use summary::{top_categories, CategoryTotal, PeriodSummary, SummaryReport};
pub use totals::total;
pub use window::{daily_subset, monthly_subset, weekly_subset, TimeWindow};
