pub use super::value_objects::TradingDate;
use serde::{Deserialize, Serialize};

/// Domain entity - a single OHLC chart point
///
/// Price fields are pass-through from the wire format: `high >= low` and
/// friends are not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: TradingDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PricePoint {
    pub fn new(time: TradingDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self { time, open, high, low, close }
    }

    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    pub fn body_size(&self) -> f64 {
        (self.close - self.open).abs()
    }
}

/// Domain entity - chart-ready series of price points
///
/// Always sorted ascending by date. Duplicate dates are kept as-is; the
/// stable sort preserves their arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a series from points in arbitrary order.
    pub fn from_unsorted(mut points: Vec<PricePoint>) -> Self {
        points.sort_by(|a, b| a.time.cmp(&b.time));
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lowest low and highest high across the series.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }

        let mut min_price = self.points[0].low;
        let mut max_price = self.points[0].high;

        for point in &self.points {
            if point.low < min_price {
                min_price = point.low;
            }
            if point.high > max_price {
                max_price = point.high;
            }
        }

        Some((min_price, max_price))
    }

    /// First and last bucket date, the full visible time extent.
    pub fn date_range(&self) -> Option<(&TradingDate, &TradingDate)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((&first.time, &last.time)),
            _ => None,
        }
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}
