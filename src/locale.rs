//! Locale tables for currency rendering.
//!
//! Each variant carries the separator characters and currency-symbol
//! placement that a standard locale-aware currency formatter emits for that
//! locale tag. The table is small on purpose; an unknown tag is a formatting
//! error the caller degrades to a sentinel, never a panic.

use serde::Deserialize;
use serde::Serialize;

/// A BCP 47 locale tag the formatter knows how to render currency for.
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
pub enum Locale {
    #[default]
    #[strum(serialize = "en-US")]
    EnUs,
    #[strum(serialize = "en-GB")]
    EnGb,
    #[strum(serialize = "de-DE")]
    DeDe,
    #[strum(serialize = "fr-FR")]
    FrFr,
    #[strum(serialize = "es-ES")]
    EsEs,
    #[strum(serialize = "it-IT")]
    ItIt,
    #[strum(serialize = "ja-JP")]
    JaJp,
}

impl Locale {
    /// Returns the locale tag (e.g., "en-US").
    pub fn tag(&self) -> &'static str {
        self.into()
    }

    /// The character separating the integer and fraction parts.
    pub fn decimal_separator(&self) -> &'static str {
        match self {
            Self::EnUs | Self::EnGb | Self::JaJp => ".",
            Self::DeDe | Self::FrFr | Self::EsEs | Self::ItIt => ",",
        }
    }

    /// The character grouping the integer part into thousands.
    ///
    /// French uses a narrow no-break space, the continental European locales
    /// a period, the English ones a comma.
    pub fn group_separator(&self) -> &'static str {
        match self {
            Self::EnUs | Self::EnGb | Self::JaJp => ",",
            Self::DeDe | Self::EsEs | Self::ItIt => ".",
            Self::FrFr => "\u{202f}",
        }
    }

    /// Whether the currency symbol precedes the amount ("$600.00") rather
    /// than trailing it ("600,00 €").
    pub fn symbol_prefixed(&self) -> bool {
        match self {
            Self::EnUs | Self::EnGb | Self::JaJp => true,
            Self::DeDe | Self::FrFr | Self::EsEs | Self::ItIt => false,
        }
    }

    /// Groups the digits of a non-negative integer per this locale.
    pub fn group_digits(&self, value: u64) -> String {
        let digits = value.to_string();
        let separator = self.group_separator();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}
