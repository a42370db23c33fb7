use stock_chart_wasm::domain::market_data::{Symbol, TimeInterval};
use stock_chart_wasm::infrastructure::http::StockHttpClient;

#[test]
fn interval_is_always_present() {
    let client = StockHttpClient::with_base_url("http://localhost:8000");
    let symbol = Symbol::from("NVDA");

    for (interval, wire) in [
        (TimeInterval::Daily, "1d"),
        (TimeInterval::Weekly, "1w"),
        (TimeInterval::Monthly, "1m"),
        (TimeInterval::Yearly, "1y"),
    ] {
        let url = client.request_url(&symbol, interval, None, None);
        assert_eq!(url, format!("http://localhost:8000/api/stock/NVDA?interval={}", wire));
        assert!(!url.contains("start_date"));
        assert!(!url.contains("end_date"));
    }
}

#[test]
fn date_bounds_appear_only_when_provided() {
    let client = StockHttpClient::with_base_url("http://localhost:8000");
    let symbol = Symbol::from("NVDA");

    let start_only = client.request_url(&symbol, TimeInterval::Daily, Some("2024-01-01"), None);
    assert!(start_only.contains("&start_date=2024-01-01"));
    assert!(!start_only.contains("end_date"));

    let end_only = client.request_url(&symbol, TimeInterval::Daily, None, Some("2024-02-01"));
    assert!(!end_only.contains("start_date"));
    assert!(end_only.contains("&end_date=2024-02-01"));
}

#[test]
fn symbol_is_uppercased_in_path() {
    let client = StockHttpClient::with_base_url("http://api.example.com/");
    let url = client.request_url(&Symbol::from("nvda"), TimeInterval::Daily, None, None);
    assert_eq!(url, "http://api.example.com/api/stock/NVDA?interval=1d");
}

#[test]
fn interval_wire_strings_round_trip() {
    use std::str::FromStr;

    for interval in [
        TimeInterval::Daily,
        TimeInterval::Weekly,
        TimeInterval::Monthly,
        TimeInterval::Yearly,
    ] {
        let wire = interval.to_query_str();
        assert_eq!(TimeInterval::from_str(wire).unwrap(), interval);
    }
    assert!(TimeInterval::from_str("5m").is_err());
}
