#![cfg(target_arch = "wasm32")]

use stock_chart_wasm::domain::chart::{ChartInstance, ChartTheme, SeriesStyle};
use stock_chart_wasm::domain::market_data::{PricePoint, PriceSeries, TradingDate};
use stock_chart_wasm::infrastructure::rendering::CanvasChart;
use stock_chart_wasm::time_utils::{first_of_month_iso, today_iso};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_dates_are_iso_and_ordered() {
    let today = today_iso();
    assert_eq!(today.len(), 10);
    assert_eq!(&today[4..5], "-");
    assert_eq!(&today[7..8], "-");

    let first = first_of_month_iso();
    assert!(first.ends_with("-01"));
    assert!(first <= today);
}

fn mount_canvas(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document.create_element("canvas").unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
}

#[wasm_bindgen_test]
fn canvas_chart_draws_and_retires() {
    mount_canvas("lifecycle-canvas");

    let mut chart =
        CanvasChart::new("lifecycle-canvas", 640, 480, ChartTheme::light()).unwrap();

    let series = PriceSeries::from_unsorted(vec![
        PricePoint::new(TradingDate::new("2024-01-03"), 11.0, 12.0, 10.5, 11.5),
        PricePoint::new(TradingDate::new("2024-01-02"), 10.5, 11.0, 10.0, 10.8),
    ]);
    chart.set_candlestick_series(&series, &SeriesStyle::default()).unwrap();

    chart.dispose();
    assert!(chart.is_disposed());

    // A retired chart swallows further draws instead of touching the canvas
    chart.set_candlestick_series(&series, &SeriesStyle::default()).unwrap();
}

#[wasm_bindgen_test]
fn missing_canvas_is_a_render_error() {
    assert!(CanvasChart::new("no-such-canvas", 640, 480, ChartTheme::light()).is_err());
}
