use crate::domain::{
    chart::{ChartInstance, ChartTheme, SeriesStyle},
    errors::{AppError, AppResult},
    logging::{LogComponent, get_logger},
    market_data::{PricePoint, PriceSeries},
};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Scale parameters computed once per draw, fitting the whole series
/// into the plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleParams {
    pub padding: f64,
    pub chart_width: f64,
    pub chart_height: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub price_range: f64,
    pub candle_width: f64,
}

impl ScaleParams {
    const PADDING: f64 = 20.0;
    const AXIS_SPACE: f64 = 60.0;

    /// Fit the full data extent into a canvas of the given size.
    /// Returns None for an empty series - nothing to scale.
    pub fn fit(series: &PriceSeries, width: u32, height: u32) -> Option<Self> {
        let (min_price, max_price) = series.price_range()?;
        let chart_width = (width as f64 - Self::PADDING * 2.0 - Self::AXIS_SPACE).max(1.0);
        let chart_height = (height as f64 - Self::PADDING * 2.0 - Self::AXIS_SPACE).max(1.0);

        // A flat series still needs a non-zero range to divide by
        let raw_range = max_price - min_price;
        let price_range = if raw_range > 0.0 { raw_range } else { 1.0 };

        Some(Self {
            padding: Self::PADDING,
            chart_width,
            chart_height,
            min_price,
            max_price,
            price_range,
            candle_width: chart_width / series.len() as f64,
        })
    }

    /// Y pixel for a price, inverted because canvas Y grows down.
    pub fn price_to_y(&self, price: f64) -> f64 {
        self.padding + ((self.max_price - price) / self.price_range) * self.chart_height
    }
}

/// Per-candle pixel geometry, precomputed before touching the context.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleGeometry {
    pub x: f64,
    pub high_y: f64,
    pub low_y: f64,
    pub open_y: f64,
    pub close_y: f64,
    pub body_width: f64,
}

impl CandleGeometry {
    pub fn compute(index: usize, point: &PricePoint, params: &ScaleParams) -> Self {
        let x = params.padding + index as f64 * params.candle_width + params.candle_width / 2.0;
        Self {
            x,
            high_y: params.price_to_y(point.high),
            low_y: params.price_to_y(point.low),
            open_y: params.price_to_y(point.open),
            close_y: params.price_to_y(point.close),
            body_width: (params.candle_width * 0.6).max(1.0),
        }
    }
}

/// Canvas 2D candlestick chart - one live instance per component.
///
/// Construction draws the empty shell (background, gridlines, axis line) so
/// the chart stays visible even when the fetch cycle never delivers data.
pub struct CanvasChart {
    canvas_id: String,
    width: u32,
    height: u32,
    theme: ChartTheme,
    disposed: bool,
}

impl CanvasChart {
    pub fn new(canvas_id: &str, width: u32, height: u32, theme: ChartTheme) -> AppResult<Self> {
        let chart = Self {
            canvas_id: canvas_id.to_string(),
            width: width.max(1),
            height: height.max(1),
            theme,
            disposed: false,
        };
        let context = chart.context()?;
        chart.draw_shell(&context);

        get_logger().debug(
            LogComponent::Infrastructure("CanvasChart"),
            &format!("Created {}x{} chart on #{}", chart.width, chart.height, chart.canvas_id),
        );

        Ok(chart)
    }

    /// Get the canvas element and its 2D context, resizing to our dimensions.
    fn context(&self) -> AppResult<CanvasRenderingContext2d> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| AppError::Render("document not available".to_string()))?;

        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| AppError::Render(format!("canvas #{} not found", self.canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::Render(format!("#{} is not a canvas", self.canvas_id)))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        canvas
            .get_context("2d")
            .map_err(|_| AppError::Render("failed to get 2D context".to_string()))?
            .ok_or_else(|| AppError::Render("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Render("failed to cast to 2D context".to_string()))
    }

    /// Background and gridlines, the empty-chart state.
    fn draw_shell(&self, context: &CanvasRenderingContext2d) {
        let width = self.width as f64;
        let height = self.height as f64;

        context.clear_rect(0.0, 0.0, width, height);
        context.set_fill_style(&JsValue::from(self.theme.background));
        context.fill_rect(0.0, 0.0, width, height);

        context.set_stroke_style(&JsValue::from(self.theme.grid_line));
        context.set_line_width(1.0);

        let grid_step = 50.0;
        let mut x = grid_step;
        while x < width {
            context.begin_path();
            context.move_to(x, 0.0);
            context.line_to(x, height);
            context.stroke();
            x += grid_step;
        }
        let mut y = grid_step;
        while y < height {
            context.begin_path();
            context.move_to(0.0, y);
            context.line_to(width, y);
            context.stroke();
            y += grid_step;
        }
    }

    /// Draw the candlestick series fitted to the full data extent.
    ///
    /// A disposed chart skips the draw - a stale cycle must never mutate a
    /// retired surface.
    pub fn set_candlestick_series(
        &mut self,
        series: &PriceSeries,
        style: &SeriesStyle,
    ) -> AppResult<()> {
        if self.disposed {
            get_logger().warn(
                LogComponent::Infrastructure("CanvasChart"),
                "Draw on disposed chart skipped",
            );
            return Ok(());
        }

        let context = self.context()?;
        self.draw_shell(&context);

        let Some(params) = ScaleParams::fit(series, self.width, self.height) else {
            get_logger().debug(
                LogComponent::Infrastructure("CanvasChart"),
                "Empty series, leaving chart shell",
            );
            return Ok(());
        };

        for (index, point) in series.points().iter().enumerate() {
            let geometry = CandleGeometry::compute(index, point, &params);
            self.draw_candle(&context, point, &geometry, style);
        }

        self.draw_time_axis(&context, series, &params)?;
        self.draw_price_scale(&context, &params)?;

        get_logger().debug(
            LogComponent::Infrastructure("CanvasChart"),
            &format!("Rendered {} candles", series.len()),
        );

        Ok(())
    }

    fn draw_candle(
        &self,
        context: &CanvasRenderingContext2d,
        point: &PricePoint,
        geometry: &CandleGeometry,
        style: &SeriesStyle,
    ) {
        let color = if point.is_bullish() { style.up_color } else { style.down_color };

        // Wick, colored like the body
        context.set_stroke_style(&JsValue::from(color));
        context.set_line_width(1.0);
        context.begin_path();
        context.move_to(geometry.x, geometry.high_y);
        context.line_to(geometry.x, geometry.low_y);
        context.stroke();

        let body_top = geometry.open_y.min(geometry.close_y);
        let body_height = (geometry.open_y - geometry.close_y).abs();
        let body_left = geometry.x - geometry.body_width / 2.0;

        context.set_fill_style(&JsValue::from(color));

        if body_height < 1.0 {
            // Doji - flat line instead of a body
            context.fill_rect(body_left, body_top, geometry.body_width, 1.0);
        } else {
            context.fill_rect(body_left, body_top, geometry.body_width, body_height);
            if style.body_border {
                context.set_stroke_style(&JsValue::from(self.theme.text));
                context.stroke_rect(body_left, body_top, geometry.body_width, body_height);
            }
        }
    }

    /// Time axis: baseline plus first/last bucket dates.
    fn draw_time_axis(
        &self,
        context: &CanvasRenderingContext2d,
        series: &PriceSeries,
        params: &ScaleParams,
    ) -> AppResult<()> {
        let baseline_y = params.padding + params.chart_height + 10.0;

        context.set_stroke_style(&JsValue::from(self.theme.grid_line));
        context.begin_path();
        context.move_to(params.padding, baseline_y);
        context.line_to(params.padding + params.chart_width, baseline_y);
        context.stroke();

        context.set_fill_style(&JsValue::from(self.theme.text));
        context.set_font("12px Arial");

        if let Some((first, last)) = series.date_range() {
            context
                .fill_text(first.as_str(), params.padding, baseline_y + 16.0)
                .map_err(|_| AppError::Render("axis label draw failed".to_string()))?;
            context
                .fill_text(
                    last.as_str(),
                    params.padding + params.chart_width - 70.0,
                    baseline_y + 16.0,
                )
                .map_err(|_| AppError::Render("axis label draw failed".to_string()))?;
        }

        Ok(())
    }

    /// Price scale: min and max labels on the right edge.
    fn draw_price_scale(
        &self,
        context: &CanvasRenderingContext2d,
        params: &ScaleParams,
    ) -> AppResult<()> {
        context.set_fill_style(&JsValue::from(self.theme.text));
        context.set_font("12px Arial");

        let label_x = params.padding + params.chart_width + 8.0;
        context
            .fill_text(&format!("{:.2}", params.max_price), label_x, params.padding + 4.0)
            .map_err(|_| AppError::Render("price label draw failed".to_string()))?;
        context
            .fill_text(
                &format!("{:.2}", params.min_price),
                label_x,
                params.padding + params.chart_height,
            )
            .map_err(|_| AppError::Render("price label draw failed".to_string()))?;

        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl ChartInstance for CanvasChart {
    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        // Best effort: the canvas may already be out of the DOM on unmount
        if let Ok(context) = self.context() {
            context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        }

        get_logger().debug(
            LogComponent::Infrastructure("CanvasChart"),
            &format!("Disposed chart on #{}", self.canvas_id),
        );
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::{PricePoint, PriceSeries, TradingDate};

    fn point(date: &str, open: f64, high: f64, low: f64, close: f64) -> PricePoint {
        PricePoint::new(TradingDate::new(date), open, high, low, close)
    }

    #[test]
    fn fit_covers_full_extent() {
        let series = PriceSeries::from_unsorted(vec![
            point("2024-01-02", 10.0, 12.0, 9.0, 11.0),
            point("2024-01-03", 11.0, 14.0, 10.0, 13.0),
        ]);
        let params = ScaleParams::fit(&series, 800, 500).unwrap();

        assert_eq!(params.min_price, 9.0);
        assert_eq!(params.max_price, 14.0);
        assert_eq!(params.price_range, 5.0);
        // Two candles split the plot width evenly
        assert!((params.candle_width * 2.0 - params.chart_width).abs() < 1e-9);
        // Extremes land on the plot edges
        assert!((params.price_to_y(14.0) - params.padding).abs() < 1e-9);
        assert!((params.price_to_y(9.0) - (params.padding + params.chart_height)).abs() < 1e-9);
    }

    #[test]
    fn fit_empty_series_is_none() {
        assert!(ScaleParams::fit(&PriceSeries::new(), 800, 500).is_none());
    }

    #[test]
    fn flat_series_avoids_zero_range() {
        let series =
            PriceSeries::from_unsorted(vec![point("2024-01-02", 10.0, 10.0, 10.0, 10.0)]);
        let params = ScaleParams::fit(&series, 800, 500).unwrap();
        assert_eq!(params.price_range, 1.0);
        assert!(params.price_to_y(10.0).is_finite());
    }

    #[test]
    fn candle_geometry_centers_in_column() {
        let series = PriceSeries::from_unsorted(vec![
            point("2024-01-02", 10.0, 12.0, 9.0, 11.0),
            point("2024-01-03", 11.0, 14.0, 10.0, 13.0),
        ]);
        let params = ScaleParams::fit(&series, 800, 500).unwrap();
        let geometry = CandleGeometry::compute(1, &series.points()[1], &params);

        let expected_x = params.padding + 1.5 * params.candle_width;
        assert!((geometry.x - expected_x).abs() < 1e-9);
        assert!(geometry.high_y < geometry.low_y);
        assert!(geometry.body_width <= params.candle_width);
    }
}
