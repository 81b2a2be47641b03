use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Raw CSV table: one header row plus data rows, all values as strings.
#[derive(Debug, Clone)]
pub struct CsvData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read CSV from stdin.
pub fn read_csv_from_stdin() -> Result<CsvData> {
    read_csv_from_reader(io::stdin().lock())
}

/// Read CSV from a file path.
pub fn read_csv_from_path(path: &Path) -> Result<CsvData> {
    let file =
        File::open(path).with_context(|| format!("Failed to open '{}'", path.display()))?;
    read_csv_from_reader(file)
}

/// Read CSV from any reader. The first record is treated as the header row.
pub fn read_csv_from_reader<R: Read>(reader: R) -> Result<CsvData> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("Failed to read CSV record")?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok(CsvData { headers, rows })
}
