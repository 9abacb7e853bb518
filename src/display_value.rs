//! Converts a raw satoshi amount into the strings the UI displays.
//!
//! The entry point is [`format`], which is total: whatever the inputs, it
//! returns a fully populated [`DisplayValue`]. Internal failures (unknown
//! currency code, unknown locale tag) degrade to a sentinel value instead of
//! propagating, and an unusable exchange rate degrades only the fiat fields.

use serde::Serialize;
use thiserror::Error;

use crate::bitcoin_unit::BitcoinUnit;
use crate::bitcoin_unit::SATS_PER_BTC;
use crate::fiat_amount::FiatAmount;
use crate::fiat_currency::FiatCurrency;
use crate::locale::Locale;

/// Placeholder shown where no displayable value exists.
const SENTINEL: &str = "-";

/// A satoshi amount rendered for display, freshly constructed per call.
///
/// Every field is always populated. When no usable exchange rate is
/// available the fiat fields hold sentinels rather than being absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayValue {
    /// Fiat amount, locale-formatted with the symbol stripped, or "-".
    pub fiat_formatted: String,
    /// Integer part of the fiat amount, including group separators.
    pub fiat_whole: String,
    /// Decimal separator of the locale ("." or ","), if any.
    pub fiat_decimal_separator: String,
    /// Fraction digits of the fiat amount.
    pub fiat_decimal_digits: String,
    /// Currency symbol, e.g. "$".
    pub fiat_symbol: String,
    /// ISO 4217 code, e.g. "USD".
    pub fiat_ticker: String,
    /// Amount in the chosen bitcoin denomination, fixed precision.
    pub bitcoin_formatted: String,
    pub bitcoin_symbol: String,
    pub bitcoin_ticker: String,
    /// Value in the paired denomination (BTC↔satoshi), or "-".
    pub alt_bitcoin_formatted: String,
    pub alt_bitcoin_symbol: String,
    pub alt_bitcoin_ticker: String,
    /// Echo of the input amount.
    pub satoshis: u64,
}

impl DisplayValue {
    /// The all-sentinel value: formatted fields hold "-", every other string
    /// is empty, and the input amount is echoed back.
    pub fn sentinel(satoshis: u64) -> Self {
        Self {
            fiat_formatted: SENTINEL.to_string(),
            fiat_whole: String::new(),
            fiat_decimal_separator: String::new(),
            fiat_decimal_digits: String::new(),
            fiat_symbol: String::new(),
            fiat_ticker: String::new(),
            bitcoin_formatted: SENTINEL.to_string(),
            bitcoin_symbol: String::new(),
            bitcoin_ticker: String::new(),
            alt_bitcoin_formatted: SENTINEL.to_string(),
            alt_bitcoin_symbol: String::new(),
            alt_bitcoin_ticker: String::new(),
            satoshis,
        }
    }
}

/// A failure during display computation. Never escapes [`format`]; it is
/// collapsed to [`DisplayValue::sentinel`] at the boundary.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
    #[error("unknown locale tag: {0}")]
    UnknownLocale(String),
}

/// Renders a satoshi amount for display in the given fiat currency, bitcoin
/// denomination and locale.
///
/// Total and pure: never panics, never errors. A missing or non-finite
/// `exchange_rate` yields sentinel fiat fields; an unknown `currency` or
/// `locale` yields the all-sentinel value.
pub fn format(
    satoshis: u64,
    exchange_rate: Option<f64>,
    currency: &str,
    bitcoin_unit: BitcoinUnit,
    locale: &str,
) -> DisplayValue {
    match try_format(satoshis, exchange_rate, currency, bitcoin_unit, locale) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(%err, "display formatting degraded to sentinel");
            DisplayValue::sentinel(satoshis)
        }
    }
}

fn try_format(
    satoshis: u64,
    exchange_rate: Option<f64>,
    currency: &str,
    bitcoin_unit: BitcoinUnit,
    locale: &str,
) -> Result<DisplayValue, FormatError> {
    let currency: FiatCurrency = currency
        .parse()
        .map_err(|_| FormatError::UnknownCurrency(currency.to_string()))?;
    let locale: Locale = locale
        .parse()
        .map_err(|_| FormatError::UnknownLocale(locale.to_string()))?;

    let mut value = DisplayValue::sentinel(satoshis);
    value.fiat_ticker = currency.code().to_string();

    // Fiat side. Only a finite rate produces fiat output; everything else
    // leaves the sentinel fields in place.
    if let Some(rate) = exchange_rate {
        let fiat_value = satoshis as f64 * rate / SATS_PER_BTC as f64;
        if fiat_value.is_finite() {
            let parts = FiatAmount::new_from_float(fiat_value, currency).parts(locale);
            value.fiat_formatted = parts.formatted;
            value.fiat_whole = parts.whole;
            value.fiat_decimal_separator = parts.decimal_separator;
            value.fiat_decimal_digits = parts.decimal_digits;
            value.fiat_symbol = parts.symbol;
        }
    }

    // Bitcoin side, pure integer math.
    value.bitcoin_formatted = bitcoin_unit.format_satoshis(satoshis);
    value.bitcoin_symbol = bitcoin_unit.symbol().to_string();
    value.bitcoin_ticker = bitcoin_unit.ticker().to_string();

    // Only the two units users toggle between carry an alt pair; the
    // micro/milli units intentionally keep the sentinel.
    match bitcoin_unit {
        BitcoinUnit::Btc => {
            // The sats pair is labeled "Sats"/"satoshi", not the ⚡ symbol.
            value.alt_bitcoin_formatted = BitcoinUnit::Satoshi.format_satoshis(satoshis);
            value.alt_bitcoin_symbol = "Sats".to_string();
            value.alt_bitcoin_ticker = "satoshi".to_string();
        }
        BitcoinUnit::Satoshi => {
            value.alt_bitcoin_formatted = BitcoinUnit::Btc.format_satoshis(satoshis);
            value.alt_bitcoin_symbol = BitcoinUnit::Btc.symbol().to_string();
            value.alt_bitcoin_ticker = BitcoinUnit::Btc.ticker().to_string();
        }
        BitcoinUnit::MicroBtc | BitcoinUnit::MilliBtc => {}
    }

    Ok(value)
}
