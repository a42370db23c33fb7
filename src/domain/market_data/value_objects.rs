use derive_more::{Deref, DerefMut, Display};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - Trading symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, DerefMut, Display, Serialize, Deserialize)]
#[display(fmt = "Symbol({})", _0)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: String) -> Result<Self, String> {
        if symbol.is_empty() {
            return Err("Symbol cannot be empty".to_string());
        }
        Ok(Self(symbol.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_uppercase())
    }
}

/// Value Object - Aggregation interval for price buckets
///
/// Wire strings match the price API's `interval` query enum.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum TimeInterval {
    #[default]
    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    Daily,

    #[strum(serialize = "1w")]
    #[serde(rename = "1w")]
    Weekly,

    #[strum(serialize = "1m")]
    #[serde(rename = "1m")]
    Monthly,

    #[strum(serialize = "1y")]
    #[serde(rename = "1y")]
    Yearly,
}

impl TimeInterval {
    pub fn to_query_str(&self) -> &str {
        self.as_ref()
    }

    /// Human-readable label for the interval selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }
}

/// Value Object - Calendar date of a price bucket, ISO `YYYY-MM-DD`
///
/// Kept as the raw string the API sent (minus any time component). Ordering
/// goes through the parsed year/month/day so malformed dates still compare
/// totally instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
#[display(fmt = "{}", _0)]
pub struct TradingDate(String);

impl TradingDate {
    pub fn new(date: impl Into<String>) -> Self {
        Self(date.into())
    }

    /// Build from a datetime string, keeping only the date portion before
    /// any `T` separator. `"2024-01-02T00:00:00Z"` becomes `"2024-01-02"`.
    pub fn from_datetime_str(raw: &str) -> Self {
        let date_part = raw.split('T').next().unwrap_or(raw);
        Self(date_part.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parsed (year, month, day) used for chronological comparison.
    /// Unparseable components collapse to zero.
    fn sort_key(&self) -> (u32, u32, u32) {
        let mut parts = self.0.splitn(3, '-');
        let year = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        let month = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        let day = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        (year, month, day)
    }
}

impl Ord for TradingDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for TradingDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for TradingDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
