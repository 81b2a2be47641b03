/// Style configuration for a single chart. The option set is closed: every
/// supported key is a field here, and the CLI parser rejects anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Histogram bin count; ignored for bar charts.
    pub bins: usize,
    /// Fill color specifier.
    pub fill: String,
    /// Outline color specifier.
    pub outline: String,
    /// Fill opacity (0.0 - 1.0).
    pub alpha: f64,
    /// Outline stroke width in pixels.
    pub line_width: u32,
    /// Silence the warning emitted when missing values are excluded.
    pub drop_missing: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            bins: 30,
            fill: "steelblue".to_string(),
            outline: "black".to_string(),
            alpha: 0.7,
            line_width: 1,
            drop_missing: false,
        }
    }
}
