//! Report CLI commands
//!
//! Spending summaries per time window and the chart view.

use chrono::Local;
use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display::CurrencyFormat;
use crate::reports::{ChartData, SummaryReport, TimeWindow};
use crate::services::ExpenseService;

/// Window selection for `report`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WindowArg {
    /// Today only
    Daily,
    /// Last 7 days
    Weekly,
    /// Last 30 days
    Monthly,
    /// All three windows
    All,
}

impl WindowArg {
    pub fn windows(&self) -> &'static [TimeWindow] {
        match self {
            Self::Daily => &[TimeWindow::Daily],
            Self::Weekly => &[TimeWindow::Weekly],
            Self::Monthly => &[TimeWindow::Monthly],
            Self::All => TimeWindow::all(),
        }
    }
}

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Which window to summarize
    #[arg(short, long, value_enum, default_value = "all")]
    pub window: WindowArg,
    /// Number of top categories to show (defaults to the configured value)
    #[arg(long)]
    pub top: Option<usize>,
}

/// Handle `report`
pub fn handle_report(service: &ExpenseService, settings: &Settings, args: ReportArgs) {
    let top_n = args.top.unwrap_or(settings.top_categories);
    let report = SummaryReport::generate(
        service.expenses(),
        args.window.windows(),
        &Local::now(),
        top_n,
    );

    print!("{}", report.format_terminal(&CurrencyFormat::from(settings)));
}

/// Handle `chart`
pub fn handle_chart(service: &ExpenseService, settings: &Settings) {
    let chart = ChartData::generate(service.expenses(), Local::now().date_naive());
    print!("{}", chart.format_terminal(&CurrencyFormat::from(settings)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_arg() {
        assert_eq!(WindowArg::Weekly.windows(), &[TimeWindow::Weekly]);
        assert_eq!(WindowArg::All.windows().len(), 3);
    }
}
