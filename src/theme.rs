//! Chart theming
//!
//! Every chart carries one fully resolved theme: concrete colors and font
//! settings with no unresolved options. Only the minimal theme ships.

use plotters::style::RGBColor;

/// Fully resolved visual theme ready for rendering
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: RGBColor,
    pub grid_color: RGBColor,
    pub axis_color: RGBColor,
    pub text_color: RGBColor,
    pub font_family: String,
    pub title_size: f64,
    pub label_size: f64,
}

impl Theme {
    /// Minimal theme: white panel, light gray grid, dark gray text.
    pub fn minimal() -> Self {
        Theme {
            background: RGBColor(255, 255, 255),
            grid_color: RGBColor(229, 229, 229),
            axis_color: RGBColor(120, 120, 120),
            text_color: RGBColor(48, 48, 48),
            font_family: "sans-serif".to_string(),
            title_size: 20.0,
            label_size: 12.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::minimal()
    }
}
