use stock_chart_wasm::domain::market_data::{PricePoint, TradingDate};

#[test]
fn price_point_methods() {
    let up = PricePoint::new(TradingDate::new("2024-01-02"), 10.0, 12.0, 9.0, 11.0);
    assert!(up.is_bullish());
    assert!(!up.is_bearish());
    assert_eq!(up.body_size(), 1.0);

    let down = PricePoint::new(TradingDate::new("2024-01-03"), 11.0, 11.5, 9.5, 10.0);
    assert!(!down.is_bullish());
    assert!(down.is_bearish());
    assert_eq!(down.body_size(), 1.0);
}

#[test]
fn flat_close_counts_as_bullish() {
    let flat = PricePoint::new(TradingDate::new("2024-01-04"), 10.0, 10.5, 9.5, 10.0);
    assert!(flat.is_bullish());
    assert!(!flat.is_bearish());
    assert_eq!(flat.body_size(), 0.0);
}
