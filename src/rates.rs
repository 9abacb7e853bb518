//! Exchange-rate lookup from the Blocktank rate endpoint.
//!
//! The endpoint relays Bitfinex tickers as an array of
//! `["tBTC<code>", <rate>]` pairs. Rates are rounded to two decimal places;
//! tickers outside the supported [`FiatCurrency`] set are skipped.

use std::collections::HashMap;

use serde_json::Value;

use crate::client::RemoteError;
use crate::fiat_currency::FiatCurrency;

const RATE_URL: &str = "https://blocktank.synonym.to/api/v1/rate";

/// Fetches the current BTC exchange rates for all supported currencies.
pub async fn fetch_bitfinex_rates() -> Result<HashMap<FiatCurrency, f64>, RemoteError> {
    let client = reqwest::Client::new();
    let pairs = client
        .get(RATE_URL)
        .send()
        .await?
        .json::<Vec<Value>>()
        .await?;

    let rates = parse_rate_pairs(&pairs);
    tracing::debug!(count = rates.len(), "fetched exchange rates");
    Ok(rates)
}

/// Parses the raw ticker pairs into a currency → rate map.
///
/// The feed is not strictly typed (rates arrive as numbers or numeric
/// strings), so each entry is decoded defensively and dropped on mismatch.
fn parse_rate_pairs(pairs: &[Value]) -> HashMap<FiatCurrency, f64> {
    let mut rates = HashMap::new();

    for pair in pairs {
        let Some(ticker) = pair.get(0).and_then(Value::as_str) else {
            continue;
        };
        let Some(rate) = pair.get(1).and_then(|v| {
            v.as_f64()
                .or_else(|| v.as_str().and_then(|s| s.parse().ok()))
        }) else {
            continue;
        };

        let code = ticker.strip_prefix("tBTC").unwrap_or(ticker);
        if let Ok(currency) = code.parse::<FiatCurrency>() {
            rates.insert(currency, (rate * 100.0).round() / 100.0);
        }
    }

    rates
}
