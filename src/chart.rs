//! Chart construction
//!
//! A `Chart` is an immutable description of one renderable chart: the kind,
//! the pre-computed series data, a fully resolved style, and a theme. The
//! render backend executes it blindly. The `histogram` and `bar_chart`
//! builders run the stat (binning / category counting) and resolve colors;
//! constraint violations surface here, not in `visualize`.

use std::collections::HashMap;

use anyhow::Result;
use log::warn;
use plotters::style::RGBColor;

use crate::palette::parse_color;
use crate::render;
use crate::style::ChartStyle;
use crate::theme::Theme;
use crate::RenderOptions;

/// Chart classification reported by [`Chart::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Histogram,
    Bar,
}

/// Fully resolved visual style (no unresolved color specifiers)
#[derive(Debug, Clone)]
pub struct ResolvedStyle {
    pub fill: RGBColor,
    pub outline: RGBColor,
    pub alpha: f64,
    pub line_width: u32,
}

/// Pre-computed series data for one chart
#[derive(Debug, Clone)]
pub(crate) enum ChartSeries {
    Histogram {
        lo: f64,
        hi: f64,
        counts: Vec<u64>,
    },
    Bar {
        categories: Vec<String>,
        counts: Vec<u64>,
    },
}

/// An immutable, renderable chart description
#[derive(Debug, Clone)]
pub struct Chart {
    title: String,
    x_label: String,
    series: ChartSeries,
    style: ResolvedStyle,
    theme: Theme,
}

impl Chart {
    pub fn kind(&self) -> ChartKind {
        match self.series {
            ChartSeries::Histogram { .. } => ChartKind::Histogram,
            ChartSeries::Bar { .. } => ChartKind::Bar,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// Number of histogram bins; `None` for bar charts.
    pub fn bin_count(&self) -> Option<usize> {
        match &self.series {
            ChartSeries::Histogram { counts, .. } => Some(counts.len()),
            ChartSeries::Bar { .. } => None,
        }
    }

    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub(crate) fn series(&self) -> &ChartSeries {
        &self.series
    }

    /// Encode the chart as PNG bytes.
    pub fn to_png(&self, options: &RenderOptions) -> Result<Vec<u8>> {
        render::render_png(self, options)
    }

    /// Render the chart as an SVG document.
    pub fn to_svg(&self, options: &RenderOptions) -> Result<String> {
        render::render_svg(self, options)
    }
}

/// Build a histogram chart from a numeric column's values.
pub(crate) fn histogram(
    column: &str,
    values: &[Option<f64>],
    style: &ChartStyle,
    theme: Theme,
) -> Result<Chart> {
    if style.bins == 0 {
        anyhow::bail!("Histogram requires a positive bin count (got 0)");
    }

    let present: Vec<f64> = values
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .collect();
    report_excluded(column, values.len() - present.len(), style.drop_missing);

    let (lo, hi) = value_range(&present);
    let size = hi - lo;

    let mut counts = vec![0u64; style.bins];
    for &v in &present {
        let mut index = ((v - lo) / size * style.bins as f64) as usize;
        if index >= style.bins {
            index = style.bins - 1;
        }
        counts[index] += 1;
    }

    Ok(Chart {
        title: format!("Histogram of {}", column),
        x_label: column.to_string(),
        series: ChartSeries::Histogram { lo, hi, counts },
        style: resolve_style(style)?,
        theme,
    })
}

/// Build a bar chart from a categorical column's values. Categories are
/// sorted lexicographically.
pub(crate) fn bar_chart(
    column: &str,
    values: &[Option<String>],
    style: &ChartStyle,
    theme: Theme,
) -> Result<Chart> {
    let mut tally: HashMap<&str, u64> = HashMap::new();
    let mut missing = 0usize;
    for value in values {
        match value {
            Some(label) => *tally.entry(label.as_str()).or_insert(0) += 1,
            None => missing += 1,
        }
    }
    report_excluded(column, missing, style.drop_missing);

    let mut categories: Vec<String> = tally.keys().map(|k| k.to_string()).collect();
    categories.sort();
    let counts = categories.iter().map(|c| tally[c.as_str()]).collect();

    Ok(Chart {
        title: format!("Bar chart of {}", column),
        x_label: column.to_string(),
        series: ChartSeries::Bar { categories, counts },
        style: resolve_style(style)?,
        theme,
    })
}

fn resolve_style(style: &ChartStyle) -> Result<ResolvedStyle> {
    Ok(ResolvedStyle {
        fill: parse_color(&style.fill)?,
        outline: parse_color(&style.outline)?,
        alpha: style.alpha,
        line_width: style.line_width,
    })
}

fn report_excluded(column: &str, excluded: usize, drop_missing: bool) {
    if excluded > 0 && !drop_missing {
        warn!(
            "column '{}': {} missing value(s) excluded from the chart",
            column, excluded
        );
    }
}

/// Data range for binning. Degenerate inputs widen to a usable interval:
/// no values -> unit range, single value -> +/- 0.5 around it.
fn value_range(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 1.0);
    }
    let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}
