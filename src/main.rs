use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use colplot::csv_reader;
use colplot::parser::parse_style_spec;
use colplot::render;
use colplot::{ChartStyle, Dataset, OutputFormat, RenderOptions};

#[derive(Parser, Debug)]
#[command(name = "colplot")]
#[command(about = "Render one column of a tabular dataset as a histogram or bar chart", long_about = None)]
struct Args {
    /// Column to visualize
    column: String,

    /// Input file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Treat the input as a JSON array of objects instead of CSV
    #[arg(long)]
    json: bool,

    /// Number of histogram bins (numeric columns only)
    #[arg(short, long)]
    bins: Option<usize>,

    /// Fill color (name, "#rrggbb", or "rgb(r,g,b)")
    #[arg(short, long)]
    fill: Option<String>,

    /// Style options (e.g. 'outline: "white", alpha: 0.5, line_width: 2')
    #[arg(short, long)]
    style: Option<String>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Output height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Output format: png or svg
    #[arg(long, default_value = "png")]
    format: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dataset = load_dataset(&args)?;

    let mut style = match &args.style {
        Some(spec) => parse_style_spec(spec, ChartStyle::default())?,
        None => ChartStyle::default(),
    };
    if let Some(bins) = args.bins {
        style.bins = bins;
    }
    if let Some(fill) = &args.fill {
        style.fill = fill.clone();
    }

    let chart = colplot::visualize(&dataset, &args.column, &style)
        .context("Failed to build chart")?;

    let format = match args.format.as_str() {
        "png" => OutputFormat::Png,
        "svg" => OutputFormat::Svg,
        other => anyhow::bail!("Unsupported output format '{}' (expected png or svg)", other),
    };
    let options = RenderOptions {
        width: args.width,
        height: args.height,
        format,
    };

    let bytes = render::render(&chart, &options).context("Failed to render chart")?;

    match &args.output {
        Some(path) => fs::write(path, &bytes)
            .with_context(|| format!("Failed to write '{}'", path.display()))?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(&bytes)
                .context("Failed to write output to stdout")?;
            handle.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

fn load_dataset(args: &Args) -> Result<Dataset> {
    if args.json {
        let text = match &args.input {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?,
            None => {
                let mut text = String::new();
                io::stdin()
                    .lock()
                    .read_to_string(&mut text)
                    .context("Failed to read JSON from stdin")?;
                text
            }
        };
        let value: serde_json::Value =
            serde_json::from_str(&text).context("Failed to parse JSON input")?;
        Dataset::from_json(&value)
    } else {
        let csv = match &args.input {
            Some(path) => csv_reader::read_csv_from_path(path)?,
            None => csv_reader::read_csv_from_stdin().context("Failed to read CSV from stdin")?,
        };
        Dataset::from_csv(csv)
    }
}
