//! Provides a safe, self-contained type for representing fiat currency amounts.

use std::fmt;

use crate::fiat_currency::FiatCurrency;
use crate::locale::Locale;

/// Represents a monetary value in a specific fiat currency.
///
/// Internally, the amount is stored as a signed 64-bit integer in the currency's
/// smallest unit (e.g., cents for USD) to prevent floating-point inaccuracies.
/// The default `Display` implementation formats this as a plain numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiatAmount {
    amount: i64,
    currency: FiatCurrency,
}

/// The constituent pieces of a locale-formatted fiat amount.
///
/// The UI renders the fraction digits in a visually distinct style, so the
/// formatted string is handed over pre-split rather than as one blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiatParts {
    /// Currency symbol, e.g. "$".
    pub symbol: String,
    /// Integer part including group separators, e.g. "9,000".
    pub whole: String,
    /// Decimal separator, empty for zero-decimal currencies.
    pub decimal_separator: String,
    /// Fraction digits, empty for zero-decimal currencies.
    pub decimal_digits: String,
    /// Symbol-free rendering: whole, separator and digits concatenated.
    pub formatted: String,
}

impl FiatAmount {
    /// Returns the currency type of the amount.
    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    /// Returns the raw amount in the currency's smallest unit (e.g., cents).
    pub fn as_minor_units(&self) -> i64 {
        self.amount
    }

    /// Creates a new `FiatAmount` from a floating-point value, typically the
    /// product of a satoshi amount and an exchange rate.
    ///
    /// The float is converted to an integer representation by rounding to the
    /// nearest minor unit based on the currency's number of decimal places.
    /// Out-of-range values saturate; the caller screens out non-finite input.
    pub fn new_from_float(value: f64, currency: FiatCurrency) -> Self {
        let decimals = currency.decimals();
        let multiplier = 10_f64.powi(decimals as i32);
        let amount = (value * multiplier).round() as i64;

        Self { amount, currency }
    }

    /// Creates a new `FiatAmount` directly from its smallest unit.
    pub fn new_from_minor(amount: i64, currency: FiatCurrency) -> Self {
        Self { amount, currency }
    }

    /// Decomposes the amount into the parts a locale-aware currency
    /// formatter would emit for the given locale.
    pub fn parts(&self, locale: Locale) -> FiatParts {
        let decimals = self.currency.decimals() as u32;
        let minor_units = self.amount.unsigned_abs();

        let (major_units, fraction) = if decimals == 0 {
            (minor_units, 0)
        } else {
            let divisor = 10_u64.pow(decimals);
            (minor_units / divisor, minor_units % divisor)
        };

        let mut whole = String::new();
        if self.amount < 0 {
            whole.push('-');
        }
        whole.push_str(&locale.group_digits(major_units));

        let (decimal_separator, decimal_digits) = if decimals == 0 {
            (String::new(), String::new())
        } else {
            (
                locale.decimal_separator().to_string(),
                format!("{:0width$}", fraction, width = decimals as usize),
            )
        };

        let formatted = format!("{whole}{decimal_separator}{decimal_digits}");

        FiatParts {
            symbol: self.currency.symbol().to_string(),
            whole,
            decimal_separator,
            decimal_digits,
            formatted,
        }
    }
}

/// Formats the amount as a plain, ungrouped numeric string (e.g., "25.34").
impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as usize;

        if decimals == 0 {
            return write!(f, "{}", self.amount);
        }

        let divisor = 10_i64.pow(decimals as u32);
        let major_units = self.amount / divisor;
        let minor_units = self.amount.abs() % divisor;

        write!(
            f,
            "{}.{:0width$}",
            major_units,
            minor_units,
            width = decimals
        )
    }
}
