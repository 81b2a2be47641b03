// Column visualization entry point

use anyhow::Result;

use crate::chart::{self, Chart};
use crate::data::{Column, ColumnNotFound, Dataset};
use crate::style::ChartStyle;
use crate::theme::Theme;

/// Build a chart for one column of a dataset: numeric columns become
/// histograms, categorical columns become bar charts.
///
/// The column must exist in the dataset; this is checked before the
/// column's type is inspected. Everything else (bin count, color
/// specifiers) is validated by the chart builders and surfaced as-is.
pub fn visualize(data: &Dataset, column: &str, style: &ChartStyle) -> Result<Chart> {
    let (name, values) = data
        .column(column)
        .ok_or_else(|| ColumnNotFound(column.to_string()))?;

    match values {
        Column::Numeric(values) => chart::histogram(name, values, style, Theme::minimal()),
        Column::Categorical(values) => chart::bar_chart(name, values, style, Theme::minimal()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;
    use crate::data::Column;

    fn make_dataset() -> Dataset {
        let categorical: Vec<Option<String>> =
            ["cat", "bat", "cat", "cat", "dog", "cat", "bat", "dog", "cat", "bat"]
                .iter()
                .map(|s| Some(s.to_string()))
                .collect();
        let numeric: Vec<Option<f64>> = [1.0, 2.0, 3.0, 10.0, 14.0, 14.0, 12.0, 12.0, 12.0, 8.0]
            .iter()
            .map(|&v| Some(v))
            .collect();
        Dataset::from_columns(vec![
            ("categorical_column".to_string(), Column::Categorical(categorical)),
            ("numeric_column".to_string(), Column::Numeric(numeric)),
        ])
        .unwrap()
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let data = make_dataset();
        let err = visualize(&data, "non_existent_column", &ChartStyle::default()).unwrap_err();
        assert!(err.downcast_ref::<ColumnNotFound>().is_some());
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_numeric_column_builds_histogram() {
        let data = make_dataset();
        let style = ChartStyle {
            bins: 5,
            fill: "darkorchid".to_string(),
            ..Default::default()
        };
        let chart = visualize(&data, "numeric_column", &style).unwrap();
        assert_eq!(chart.kind(), ChartKind::Histogram);
        assert_eq!(chart.bin_count(), Some(5));
        assert_eq!(chart.title(), "Histogram of numeric_column");
        let fill = chart.style().fill;
        assert_eq!((fill.0, fill.1, fill.2), (153, 50, 204));
    }

    #[test]
    fn test_categorical_column_builds_bar_chart() {
        let data = make_dataset();
        let style = ChartStyle {
            fill: "darkolivegreen".to_string(),
            ..Default::default()
        };
        let chart = visualize(&data, "categorical_column", &style).unwrap();
        assert_eq!(chart.kind(), ChartKind::Bar);
        assert_eq!(chart.bin_count(), None);
        assert_eq!(chart.title(), "Bar chart of categorical_column");
        let fill = chart.style().fill;
        assert_eq!((fill.0, fill.1, fill.2), (85, 107, 47));
    }

    #[test]
    fn test_default_style() {
        let data = make_dataset();
        let chart = visualize(&data, "numeric_column", &ChartStyle::default()).unwrap();
        assert_eq!(chart.bin_count(), Some(30));
        let style = chart.style();
        // steelblue fill, black outline, 0.7 alpha
        assert_eq!((style.fill.0, style.fill.1, style.fill.2), (70, 130, 180));
        assert_eq!((style.outline.0, style.outline.1, style.outline.2), (0, 0, 0));
        assert_eq!(style.alpha, 0.7);
    }

    #[test]
    fn test_visualize_is_idempotent() {
        let data = make_dataset();
        let style = ChartStyle {
            bins: 5,
            ..Default::default()
        };
        let first = visualize(&data, "numeric_column", &style).unwrap();
        let second = visualize(&data, "numeric_column", &style).unwrap();
        assert_eq!(format!("{:?}", first), format!("{:?}", second));
    }

    #[test]
    fn test_case_insensitive_column_lookup() {
        let data = make_dataset();
        let chart = visualize(&data, "NUMERIC_COLUMN", &ChartStyle::default()).unwrap();
        assert_eq!(chart.kind(), ChartKind::Histogram);
        // Title uses the canonical header name
        assert_eq!(chart.title(), "Histogram of numeric_column");
    }

    #[test]
    fn test_empty_dataset_still_charts() {
        let data = Dataset::from_columns(vec![
            ("age".to_string(), Column::Numeric(vec![])),
            ("pet".to_string(), Column::Categorical(vec![])),
        ])
        .unwrap();
        let hist = visualize(&data, "age", &ChartStyle::default()).unwrap();
        assert_eq!(hist.kind(), ChartKind::Histogram);
        let bar = visualize(&data, "pet", &ChartStyle::default()).unwrap();
        assert_eq!(bar.kind(), ChartKind::Bar);
    }

    #[test]
    fn test_missing_values_are_tolerated() {
        let data = Dataset::from_columns(vec![(
            "age".to_string(),
            Column::Numeric(vec![Some(1.0), None, Some(3.0)]),
        )])
        .unwrap();

        let chart = visualize(&data, "age", &ChartStyle::default()).unwrap();
        assert_eq!(chart.kind(), ChartKind::Histogram);

        let silenced = ChartStyle {
            drop_missing: true,
            ..Default::default()
        };
        let chart = visualize(&data, "age", &silenced).unwrap();
        assert_eq!(chart.kind(), ChartKind::Histogram);
    }

    #[test]
    fn test_zero_bins_is_a_builder_error() {
        let data = make_dataset();
        let style = ChartStyle {
            bins: 0,
            ..Default::default()
        };
        let err = visualize(&data, "numeric_column", &style).unwrap_err();
        assert!(err.downcast_ref::<ColumnNotFound>().is_none());
    }

    #[test]
    fn test_unknown_color_is_a_builder_error() {
        let data = make_dataset();
        let style = ChartStyle {
            fill: "notacolor".to_string(),
            ..Default::default()
        };
        let err = visualize(&data, "categorical_column", &style).unwrap_err();
        assert!(err.to_string().contains("notacolor"));
    }
}
