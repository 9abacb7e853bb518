//! The bitcoin denominations a satoshi amount can be displayed in.

use serde::Deserialize;
use serde::Serialize;

/// Number of satoshis in one whole bitcoin.
pub const SATS_PER_BTC: u64 = 100_000_000;

/// A display scale for a satoshi amount.
///
/// Fixed ratios: 1 BTC = 1 000 mBTC = 1 000 000 μBTC = 100 000 000 satoshi.
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
pub enum BitcoinUnit {
    #[default]
    #[strum(serialize = "satoshi")]
    Satoshi,
    #[strum(serialize = "μBTC", serialize = "uBTC")]
    MicroBtc,
    #[strum(serialize = "mBTC")]
    MilliBtc,
    #[strum(serialize = "BTC")]
    Btc,
}

impl BitcoinUnit {
    /// Returns the number of satoshis one whole unit represents.
    pub fn satoshis_per_unit(&self) -> u64 {
        match self {
            Self::Satoshi => 1,
            Self::MicroBtc => 100,
            Self::MilliBtc => 100_000,
            Self::Btc => SATS_PER_BTC,
        }
    }

    /// Returns the graphical symbol for the unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Satoshi => "⚡",
            Self::MicroBtc => "μ₿",
            Self::MilliBtc => "m₿",
            Self::Btc => "₿",
        }
    }

    /// Returns the display ticker for the unit.
    ///
    /// Satoshis are labeled "Sats" rather than the wire name "satoshi".
    pub fn ticker(&self) -> &'static str {
        match self {
            Self::Satoshi => "Sats",
            Self::MicroBtc => "μBTC",
            Self::MilliBtc => "mBTC",
            Self::Btc => "BTC",
        }
    }

    /// Formats a satoshi amount in this unit.
    ///
    /// Satoshis print as a bare integer; every other unit prints with a fixed
    /// 8 decimal places. Pure integer math, no locale grouping.
    pub fn format_satoshis(&self, satoshis: u64) -> String {
        let ratio = self.satoshis_per_unit();
        if ratio == 1 {
            return satoshis.to_string();
        }

        // Digits of the ratio below one whole unit; the rest is zero padding
        // out to 8 decimal places.
        let exact_digits = ratio.ilog10() as usize;
        let whole = satoshis / ratio;
        let fraction = format!("{:0width$}", satoshis % ratio, width = exact_digits);
        format!("{whole}.{fraction:0<8}")
    }
}
