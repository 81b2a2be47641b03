// Library exports for colplot

pub mod chart;
pub mod csv_reader;
pub mod data;
pub mod palette;
pub mod parser;
pub mod render;
pub mod style;
pub mod theme;
pub mod visualize;

use serde::Deserialize;

// Public API re-exports
pub use chart::{Chart, ChartKind, ResolvedStyle};
pub use data::{Column, ColumnNotFound, ColumnType, Dataset};
pub use style::ChartStyle;
pub use theme::Theme;
pub use visualize::visualize;

#[derive(Debug, Clone, Deserialize, Default)]
pub enum OutputFormat {
    #[serde(rename = "png")]
    #[default]
    Png,
    #[serde(rename = "svg")]
    Svg,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderOptions {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default, rename = "type")]
    pub format: OutputFormat,
}

fn default_width() -> u32 { 800 }
fn default_height() -> u32 { 600 }

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            format: OutputFormat::Png,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.width, 800);
        assert_eq!(options.height, 600);
        assert!(matches!(options.format, OutputFormat::Png));
    }

    #[test]
    fn test_render_options_from_json() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"width": 400, "type": "svg"}"#).unwrap();
        assert_eq!(options.width, 400);
        assert_eq!(options.height, 600);
        assert!(matches!(options.format, OutputFormat::Svg));
    }
}
