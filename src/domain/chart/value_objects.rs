/// Value Object - Chart shell colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTheme {
    pub background: &'static str,
    pub grid_line: &'static str,
    pub text: &'static str,
}

impl ChartTheme {
    /// Light theme: white background, faint gridlines, dark labels.
    pub fn light() -> Self {
        Self { background: "#ffffff", grid_line: "#f0f0f0", text: "#333" }
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::light()
    }
}

/// Value Object - Candlestick series colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesStyle {
    pub up_color: &'static str,
    pub down_color: &'static str,
    /// Candle bodies are drawn without outlines when false.
    pub body_border: bool,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self { up_color: "#26a69a", down_color: "#ef5350", body_border: false }
    }
}
