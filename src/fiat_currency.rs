//! Defines the fiat currencies the exchange-rate feed quotes against.

use serde::Deserialize;
use serde::Serialize;

/// A fiat currency supported by the rate feed, with its formatting rules.
///
/// The set mirrors the Bitfinex tickers the Blocktank rate endpoint serves.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    #[default]
    USD, // United States Dollar
    EUR, // Euro
    JPY, // Japanese Yen
    GBP, // Great British Pound
}

impl FiatCurrency {
    /// Returns the number of decimal digits used by the currency.
    ///
    /// USD, EUR and GBP use 2 decimal places; JPY uses 0.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the graphical symbol for the currency (e.g., '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "€",
            Self::JPY => "¥",
            Self::GBP => "£",
        }
    }

    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::USD => "United States Dollar",
            Self::EUR => "Euro",
            Self::JPY => "Japanese Yen",
            Self::GBP => "Great British Pound",
        }
    }
}
