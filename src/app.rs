use leptos::html::{Canvas, Div};
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use strum::IntoEnumIterator;

use crate::domain::{
    chart::{ChartSlot, ChartTheme, RenderGeneration, SeriesStyle},
    logging::{LogComponent, get_logger},
    market_data::{Symbol, TimeInterval},
};
use crate::infrastructure::{http::StockHttpClient, rendering::CanvasChart};
use crate::time_utils;

pub const DEFAULT_SYMBOL: &str = "NVDA";
pub const CHART_CANVAS_ID: &str = "stock-chart-canvas";
pub const CHART_HEIGHT: u32 = 500;
/// Used when the container reports zero width (not laid out yet).
pub const FALLBACK_CHART_WIDTH: u32 = 800;

/// Date-picker constraints derived from the current selection.
///
/// The start picker cannot pass the end date, the end picker stays within
/// `[start, today]`. Invalid ranges are prevented here, never validated
/// after the fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerBounds {
    pub start_max: String,
    pub end_min: String,
    pub end_max: String,
}

impl PickerBounds {
    pub fn compute(start_date: &str, end_date: &str, today: &str) -> Self {
        let start_max = if end_date.is_empty() { today } else { end_date };
        Self {
            start_max: start_max.to_string(),
            end_min: start_date.to_string(),
            end_max: today.to_string(),
        }
    }
}

/// Root component: owns the interval and date-range state and re-renders
/// the chart with new parameters on every change.
#[component]
pub fn App() -> impl IntoView {
    let today = time_utils::today_iso();
    let (interval, set_interval) = create_signal(TimeInterval::default());
    let (start_date, set_start_date) = create_signal(time_utils::first_of_month_iso());
    let (end_date, set_end_date) = create_signal(today.clone());

    let bounds = create_memo(move |_| {
        PickerBounds::compute(&start_date.get(), &end_date.get(), &today)
    });

    view! {
        <style>
            {r#"
            .stock-chart-app {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                background: #fafafa;
                color: #333;
                min-height: 100vh;
                padding: 24px;
            }

            .controls-bar {
                display: flex;
                align-items: center;
                gap: 16px;
                margin-bottom: 48px;
            }

            .interval-select,
            .date-picker {
                border: 1px solid #ddd;
                border-radius: 4px;
                padding: 8px;
                background: #ffffff;
                box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                font-size: 14px;
                color: #333;
            }

            .date-separator {
                color: #888;
            }

            .chart-container {
                width: 100%;
                margin-top: 2rem;
            }

            .chart-status {
                color: #888;
                font-size: 13px;
                margin-top: 8px;
            }
            "#}
        </style>
        <div class="stock-chart-app">
            <div class="controls-bar">
                <select
                    class="interval-select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_interval.set(TimeInterval::from_str(&value).unwrap_or_default());
                    }
                >
                    {TimeInterval::iter()
                        .map(|candidate| {
                            view! {
                                <option
                                    value=candidate.to_query_str().to_string()
                                    selected=move || interval.get() == candidate
                                >
                                    {candidate.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <input
                    type="date"
                    class="date-picker"
                    prop:value=move || start_date.get()
                    max=move || bounds.get().start_max
                    on:input=move |ev| set_start_date.set(event_target_value(&ev))
                />
                <span class="date-separator">"to"</span>
                <input
                    type="date"
                    class="date-picker"
                    prop:value=move || end_date.get()
                    min=move || bounds.get().end_min
                    max=move || bounds.get().end_max
                    on:input=move |ev| set_end_date.set(event_target_value(&ev))
                />
            </div>

            <StockChart
                symbol=Symbol::from(DEFAULT_SYMBOL)
                interval=interval
                start_date=start_date
                end_date=end_date
            />
        </div>
    }
}

/// Chart component: fetches price data for its inputs and renders a
/// candlestick chart.
///
/// Every input change retires the current chart, creates a fresh one sized
/// to the container, and starts a new fetch cycle. Overlapping cycles are
/// serialized by the generation counter: only the newest one may draw.
#[component]
pub fn StockChart(
    symbol: Symbol,
    #[prop(into)] interval: Signal<TimeInterval>,
    #[prop(into)] start_date: Signal<String>,
    #[prop(into)] end_date: Signal<String>,
) -> impl IntoView {
    let container_ref = create_node_ref::<Div>();
    let canvas_ref = create_node_ref::<Canvas>();
    let (status, set_status) = create_signal(String::new());

    let slot: Rc<RefCell<ChartSlot<CanvasChart>>> = Rc::new(RefCell::new(ChartSlot::new()));
    let generation = Rc::new(RenderGeneration::new());

    {
        let slot = Rc::clone(&slot);
        let generation = Rc::clone(&generation);

        create_effect(move |_| {
            let interval = interval.get();
            let start = start_date.get();
            let end = end_date.get();

            // Node refs are reactive: the effect re-runs once the canvas
            // is actually in the DOM.
            let Some(container) = container_ref.get() else { return };
            if canvas_ref.get().is_none() {
                return;
            }

            let measured = container.client_width();
            let width = if measured > 0 { measured as u32 } else { FALLBACK_CHART_WIDTH };

            // Retire the previous chart before installing its replacement
            let chart =
                match CanvasChart::new(CHART_CANVAS_ID, width, CHART_HEIGHT, ChartTheme::light()) {
                    Ok(chart) => chart,
                    Err(e) => {
                        get_logger().error(
                            LogComponent::Presentation("StockChart"),
                            &format!("❌ Chart creation failed: {}", e),
                        );
                        return;
                    }
                };
            slot.borrow_mut().replace(chart);

            let token = generation.begin();
            set_status.set("Loading...".to_string());

            let client = StockHttpClient::new();
            let symbol = symbol.clone();
            let slot = Rc::clone(&slot);
            let generation = Rc::clone(&generation);

            spawn_local(async move {
                let start = (!start.is_empty()).then_some(start);
                let end = (!end.is_empty()).then_some(end);

                let result = client
                    .fetch_price_series(&symbol, interval, start.as_deref(), end.as_deref())
                    .await;

                // A newer cycle owns the chart now; this result is stale
                if !generation.is_current(token) {
                    get_logger().debug(
                        LogComponent::Presentation("StockChart"),
                        "Stale fetch result discarded",
                    );
                    return;
                }

                match result {
                    Ok(series) => {
                        let mut slot = slot.borrow_mut();
                        let Some(chart) = slot.current_mut() else { return };
                        match chart.set_candlestick_series(&series, &SeriesStyle::default()) {
                            Ok(()) => set_status.set(format!(
                                "{} · {} points",
                                interval.label(),
                                series.len()
                            )),
                            Err(e) => get_logger().error(
                                LogComponent::Presentation("StockChart"),
                                &format!("❌ Render failed: {}", e),
                            ),
                        }
                    }
                    Err(e) => {
                        // Logged and swallowed: the empty shell stays up
                        get_logger().error(
                            LogComponent::Presentation("StockChart"),
                            &format!("❌ Fetch failed: {}", e),
                        );
                    }
                }
            });
        });
    }

    {
        let slot = Rc::clone(&slot);
        on_cleanup(move || slot.borrow_mut().clear());
    }

    view! {
        <div class="chart-container" node_ref=container_ref>
            <canvas
                id=CHART_CANVAS_ID
                node_ref=canvas_ref
                width="800"
                height="500"
            ></canvas>
            <div class="chart-status">{move || status.get()}</div>
        </div>
    }
}
