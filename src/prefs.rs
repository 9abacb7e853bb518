//! The user's currency display preference, resolved from the environment.

use std::env;

use serde::Deserialize;
use serde::Serialize;

use crate::bitcoin_unit::BitcoinUnit;
use crate::fiat_currency::FiatCurrency;
use crate::locale::Locale;

/// How amounts should be presented: which fiat currency, which bitcoin
/// denomination, and which locale's formatting rules.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DisplayPreference {
    pub currency: FiatCurrency,
    pub bitcoin_unit: BitcoinUnit,
    pub locale: Locale,
}

impl DisplayPreference {
    /// Creates a DisplayPreference instance from environment variables,
    /// with conservative in-code defaults (USD, satoshi, en-US).
    ///
    /// # Environment Variables:
    /// - `BLOCKTANK_FIAT_CURRENCY`: "USD", "EUR", "JPY" or "GBP".
    /// - `BLOCKTANK_BITCOIN_UNIT`: "satoshi", "μBTC", "mBTC" or "BTC".
    /// - `BLOCKTANK_LOCALE`: a supported locale tag such as "en-US".
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let currency = env::var("BLOCKTANK_FIAT_CURRENCY")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        let bitcoin_unit = env::var("BLOCKTANK_BITCOIN_UNIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        let locale = env::var("BLOCKTANK_LOCALE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Self {
            currency,
            bitcoin_unit,
            locale,
        }
    }
}

impl Default for DisplayPreference {
    fn default() -> Self {
        Self::from_env()
    }
}
