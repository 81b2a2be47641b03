// Plotters render backend for chart objects

use anyhow::{anyhow, Context, Result};
use image::ImageEncoder;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::chart::{Chart, ChartSeries};
use crate::{OutputFormat, RenderOptions};

/// Render a chart in the format selected by `options`.
pub fn render(chart: &Chart, options: &RenderOptions) -> Result<Vec<u8>> {
    match options.format {
        OutputFormat::Png => render_png(chart, options),
        OutputFormat::Svg => Ok(render_svg(chart, options)?.into_bytes()),
    }
}

/// Render a chart to PNG bytes.
pub fn render_png(chart: &Chart, options: &RenderOptions) -> Result<Vec<u8>> {
    let (width, height) = (options.width, options.height);
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_chart(chart, &root)?;
        root.present()
            .map_err(|e| anyhow!("Failed to present drawing: {}", e))?;
    }

    let mut png_bytes = Vec::new();
    {
        let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
        encoder
            .write_image(&buffer, width, height, image::ColorType::Rgb8)
            .context("Failed to encode PNG")?;
    }

    Ok(png_bytes)
}

/// Render a chart to an SVG document.
pub fn render_svg(chart: &Chart, options: &RenderOptions) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height))
            .into_drawing_area();
        draw_chart(chart, &root)?;
        root.present()
            .map_err(|e| anyhow!("Failed to present drawing: {}", e))?;
    }
    Ok(svg)
}

fn draw_chart<DB: DrawingBackend>(chart: &Chart, root: &DrawingArea<DB, Shift>) -> Result<()> {
    let theme = chart.theme();
    let style = chart.style();

    root.fill(&theme.background)
        .map_err(|e| anyhow!("Failed to fill background: {}", e))?;

    match chart.series() {
        ChartSeries::Histogram { lo, hi, counts } => {
            let y_max = counts.iter().copied().max().unwrap_or(0).max(1) as f64;

            let mut ctx = ChartBuilder::on(root)
                .margin(10)
                .caption(
                    chart.title(),
                    TextStyle::from((theme.font_family.as_str(), theme.title_size).into_font())
                        .color(&theme.text_color),
                )
                .x_label_area_size(40)
                .y_label_area_size(50)
                .build_cartesian_2d(*lo..*hi, 0.0..(y_max * 1.05))
                .map_err(|e| anyhow!("Failed to build chart: {}", e))?;

            ctx.configure_mesh()
                .light_line_style(&theme.background)
                .bold_line_style(&theme.grid_color)
                .axis_style(&theme.axis_color)
                .label_style(
                    TextStyle::from((theme.font_family.as_str(), theme.label_size).into_font())
                        .color(&theme.text_color),
                )
                .x_desc(chart.x_label())
                .y_desc("count")
                .draw()
                .map_err(|e| anyhow!("Failed to draw mesh: {}", e))?;

            let bin_width = (*hi - *lo) / counts.len() as f64;

            ctx.draw_series(counts.iter().enumerate().map(|(i, &count)| {
                let x0 = *lo + i as f64 * bin_width;
                Rectangle::new(
                    [(x0, 0.0), (x0 + bin_width, count as f64)],
                    style.fill.mix(style.alpha).filled(),
                )
            }))
            .map_err(|e| anyhow!("Failed to draw histogram bars: {}", e))?;

            // Bin outlines drawn as a second pass so fills never cover them
            ctx.draw_series(counts.iter().enumerate().map(|(i, &count)| {
                let x0 = *lo + i as f64 * bin_width;
                Rectangle::new(
                    [(x0, 0.0), (x0 + bin_width, count as f64)],
                    style.outline.stroke_width(style.line_width),
                )
            }))
            .map_err(|e| anyhow!("Failed to draw histogram outlines: {}", e))?;
        }
        ChartSeries::Bar { categories, counts } => {
            let y_max = counts.iter().copied().max().unwrap_or(0).max(1) as f64;
            let x_max = categories.len().max(1) as f64;

            let mut ctx = ChartBuilder::on(root)
                .margin(10)
                .caption(
                    chart.title(),
                    TextStyle::from((theme.font_family.as_str(), theme.title_size).into_font())
                        .color(&theme.text_color),
                )
                .x_label_area_size(40)
                .y_label_area_size(50)
                .build_cartesian_2d(0.0..x_max, 0.0..(y_max * 1.05))
                .map_err(|e| anyhow!("Failed to build chart: {}", e))?;

            // Configure mesh with category names as x-axis labels
            let labels = categories.clone();
            ctx.configure_mesh()
                .light_line_style(&theme.background)
                .bold_line_style(&theme.grid_color)
                .axis_style(&theme.axis_color)
                .label_style(
                    TextStyle::from((theme.font_family.as_str(), theme.label_size).into_font())
                        .color(&theme.text_color),
                )
                .x_labels(categories.len().max(1))
                .x_label_formatter(&|x| {
                    let idx = *x as usize;
                    if idx < labels.len() {
                        labels[idx].clone()
                    } else {
                        String::new()
                    }
                })
                .x_desc(chart.x_label())
                .y_desc("count")
                .draw()
                .map_err(|e| anyhow!("Failed to draw mesh: {}", e))?;

            const BAR_WIDTH: f64 = 0.8;

            ctx.draw_series(counts.iter().enumerate().map(|(i, &count)| {
                let x_center = i as f64 + 0.5;
                Rectangle::new(
                    [
                        (x_center - BAR_WIDTH / 2.0, 0.0),
                        (x_center + BAR_WIDTH / 2.0, count as f64),
                    ],
                    style.fill.mix(style.alpha).filled(),
                )
            }))
            .map_err(|e| anyhow!("Failed to draw bars: {}", e))?;

            ctx.draw_series(counts.iter().enumerate().map(|(i, &count)| {
                let x_center = i as f64 + 0.5;
                Rectangle::new(
                    [
                        (x_center - BAR_WIDTH / 2.0, 0.0),
                        (x_center + BAR_WIDTH / 2.0, count as f64),
                    ],
                    style.outline.stroke_width(style.line_width),
                )
            }))
            .map_err(|e| anyhow!("Failed to draw bar outlines: {}", e))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart;
    use crate::style::ChartStyle;
    use crate::theme::Theme;

    fn is_valid_png(bytes: &[u8]) -> bool {
        bytes.len() > 8 && &bytes[0..8] == &[137, 80, 78, 71, 13, 10, 26, 10]
    }

    fn sample_histogram() -> Chart {
        let values: Vec<Option<f64>> = [1.0, 2.0, 3.0, 4.0, 5.0].iter().map(|&v| Some(v)).collect();
        chart::histogram("x", &values, &ChartStyle::default(), Theme::minimal()).unwrap()
    }

    fn sample_bar_chart() -> Chart {
        let values: Vec<Option<String>> = ["a", "b", "a"].iter().map(|s| Some(s.to_string())).collect();
        chart::bar_chart("label", &values, &ChartStyle::default(), Theme::minimal()).unwrap()
    }

    #[test]
    fn test_histogram_png_output() {
        let bytes = render_png(&sample_histogram(), &RenderOptions::default()).unwrap();
        assert!(is_valid_png(&bytes));
    }

    #[test]
    fn test_bar_chart_png_output() {
        let bytes = render_png(&sample_bar_chart(), &RenderOptions::default()).unwrap();
        assert!(is_valid_png(&bytes));
    }

    #[test]
    fn test_svg_output() {
        let svg = render_svg(&sample_bar_chart(), &RenderOptions::default()).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let options = RenderOptions {
            format: OutputFormat::Svg,
            ..Default::default()
        };
        let bytes = render(&sample_histogram(), &options).unwrap();
        assert!(String::from_utf8(bytes).unwrap().contains("<svg"));
    }
}
