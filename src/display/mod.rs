//! Display formatting for terminal output
//!
//! Currency and date rendering, the expense list view, and user
//! notifications. Everything here is presentation only.

pub mod currency;
pub mod date;
pub mod expense;
pub mod notification;

pub use currency::{format_currency, CurrencyFormat};
pub use date::{format_date, format_date_for_display, DISPLAY_DATE_FORMAT};
pub use expense::{format_expense_details, format_expense_list, format_expense_table};
pub use notification::{Notification, NotificationKind};
