use crate::domain::{
    errors::{AppError, AppResult},
    logging::{LogComponent, get_logger},
    market_data::{PricePoint, PriceSeries, Symbol, TimeInterval, TradingDate},
};
use crate::infrastructure::config;
use gloo::net::http::Request;
use serde::Deserialize;

/// A price field as the API sends it - quoted or bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceField {
    Number(f64),
    Text(String),
}

impl PriceField {
    /// Coerce to f64. Unparseable text is rejected rather than passed
    /// through as NaN.
    pub fn coerce(&self) -> AppResult<f64> {
        match self {
            PriceField::Number(value) => Ok(*value),
            PriceField::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| AppError::Decode(format!("not a number: {:?}", raw))),
        }
    }
}

/// Raw price record in the API's wire shape.
///
/// The numbered keys come from the upstream data vendor and are preserved
/// verbatim. Volume is carried on the wire but has no chart counterpart.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPriceRecord {
    pub date: String,
    #[serde(rename = "1. open")]
    pub open: PriceField,
    #[serde(rename = "2. high")]
    pub high: PriceField,
    #[serde(rename = "3. low")]
    pub low: PriceField,
    #[serde(rename = "4. close")]
    pub close: PriceField,
    #[serde(rename = "5. volume", default)]
    pub volume: Option<PriceField>,
}

impl RawPriceRecord {
    /// Transform into a chart point: date portion before any `T` separator,
    /// prices coerced to f64. Range sanity (high >= low etc.) is not checked.
    pub fn to_price_point(&self) -> AppResult<PricePoint> {
        Ok(PricePoint::new(
            TradingDate::from_datetime_str(&self.date),
            self.open.coerce()?,
            self.high.coerce()?,
            self.low.coerce()?,
            self.close.coerce()?,
        ))
    }
}

/// HTTP client for the stock price API
#[derive(Clone)]
pub struct StockHttpClient {
    base_url: String,
}

impl Default for StockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl StockHttpClient {
    pub fn new() -> Self {
        Self { base_url: config::api_base_url() }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self { base_url: config::normalize_base_url(base_url) }
    }

    /// Full request URL: `interval` always, date bounds only when provided.
    pub fn request_url(
        &self,
        symbol: &Symbol,
        interval: TimeInterval,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> String {
        let mut url = format!(
            "{}/api/stock/{}?interval={}",
            self.base_url,
            symbol.value(),
            interval.to_query_str()
        );
        if let Some(start) = start_date {
            url.push_str("&start_date=");
            url.push_str(start);
        }
        if let Some(end) = end_date {
            url.push_str("&end_date=");
            url.push_str(end);
        }
        url
    }

    /// Fetch OHLC records and return them as a chart-ready sorted series.
    pub async fn fetch_price_series(
        &self,
        symbol: &Symbol,
        interval: TimeInterval,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> AppResult<PriceSeries> {
        let url = self.request_url(symbol, interval, start_date, end_date);

        get_logger().info(
            LogComponent::Infrastructure("StockHttpClient"),
            &format!("📡 Fetching {} prices: {}", symbol.value(), url),
        );

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::Network(format!("request failed: {:?}", e)))?;

        if !response.ok() {
            return Err(AppError::Network(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let records: Vec<RawPriceRecord> = response
            .json()
            .await
            .map_err(|e| AppError::Decode(format!("response is not a price array: {:?}", e)))?;

        let points = records
            .iter()
            .map(RawPriceRecord::to_price_point)
            .collect::<AppResult<Vec<_>>>()?;

        let series = PriceSeries::from_unsorted(points);

        get_logger().info(
            LogComponent::Infrastructure("StockHttpClient"),
            &format!("✅ Fetched {} price points for {}", series.len(), symbol.value()),
        );

        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_field_coercion() {
        assert_eq!(PriceField::Number(10.5).coerce().unwrap(), 10.5);
        assert_eq!(PriceField::Text("11.0".to_string()).coerce().unwrap(), 11.0);
        assert_eq!(PriceField::Text(" 10.8 ".to_string()).coerce().unwrap(), 10.8);
        assert!(PriceField::Text("abc".to_string()).coerce().is_err());
        assert!(PriceField::Text(String::new()).coerce().is_err());
    }

    #[test]
    fn url_has_interval_and_optional_dates() {
        let client = StockHttpClient::with_base_url("http://localhost:8000/");
        let symbol = Symbol::from("nvda");

        let bare = client.request_url(&symbol, TimeInterval::Daily, None, None);
        assert_eq!(bare, "http://localhost:8000/api/stock/NVDA?interval=1d");

        let bounded = client.request_url(
            &symbol,
            TimeInterval::Weekly,
            Some("2024-01-01"),
            Some("2024-02-01"),
        );
        assert_eq!(
            bounded,
            "http://localhost:8000/api/stock/NVDA?interval=1w&start_date=2024-01-01&end_date=2024-02-01"
        );
    }
}
