//! Currency formatting
//!
//! Amounts are shown rounded to whole units with grouped thousands, e.g.
//! `Rp 1.500.000`. Formatting never feeds back into stored values.

use crate::config::Settings;
use crate::models::Money;

/// How amounts are rendered for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub thousands_separator: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "Rp".to_string(),
            thousands_separator: ".".to_string(),
        }
    }
}

impl From<&Settings> for CurrencyFormat {
    fn from(settings: &Settings) -> Self {
        Self {
            symbol: settings.currency_symbol.clone(),
            thousands_separator: settings.thousands_separator.clone(),
        }
    }
}

impl CurrencyFormat {
    /// Render an amount with zero decimal places
    ///
    /// Halves round away from zero.
    pub fn format(&self, amount: Money) -> String {
        let cents = amount.cents();
        let units = (cents.unsigned_abs() + 50) / 100;
        let sign = if cents < 0 && units > 0 { "-" } else { "" };
        format!(
            "{}{} {}",
            sign,
            self.symbol,
            group_digits(units, &self.thousands_separator)
        )
    }
}

/// Format with the default currency settings
pub fn format_currency(amount: Money) -> String {
    CurrencyFormat::default().format(amount)
}

fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Money::zero()), "Rp 0");
        assert_eq!(format_currency(Money::from_units(150)), "Rp 150");
        assert_eq!(format_currency(Money::from_units(1500)), "Rp 1.500");
        assert_eq!(format_currency(Money::from_units(1_234_567)), "Rp 1.234.567");
    }

    #[test]
    fn test_rounds_to_whole_units() {
        assert_eq!(format_currency(Money::from_cents(1049)), "Rp 10");
        assert_eq!(format_currency(Money::from_cents(1050)), "Rp 11");
        assert_eq!(format_currency(Money::from_cents(-1050)), "-Rp 11");
        assert_eq!(format_currency(Money::from_cents(-20)), "Rp 0");
    }

    #[test]
    fn test_custom_symbol_and_separator() {
        let format = CurrencyFormat {
            symbol: "$".into(),
            thousands_separator: ",".into(),
        };
        assert_eq!(format.format(Money::from_units(25_000)), "$ 25,000");
    }

    #[test]
    fn test_formatting_is_repeatable() {
        let amount = Money::from_cents(123_456);
        assert_eq!(format_currency(amount), format_currency(amount));
        assert_eq!(amount.cents(), 123_456);
    }
}
