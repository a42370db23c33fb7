pub mod canvas_chart;

pub use canvas_chart::{CandleGeometry, CanvasChart, ScaleParams};
