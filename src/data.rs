use anyhow::{anyhow, Result};
use serde_json::Value;
use thiserror::Error;

use crate::csv_reader::CsvData;

/// Error raised when a requested column is not part of the dataset.
#[derive(Debug, Error)]
#[error("column '{0}' does not exist in the dataset")]
pub struct ColumnNotFound(pub String);

/// Per-column type tag, fixed when the dataset is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Numeric,
    Categorical,
}

/// Values of a single column. Missing entries are `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<Option<f64>>),
    Categorical(Vec<Option<String>>),
}

impl Column {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Numeric(_) => ColumnType::Numeric,
            Column::Categorical(_) => ColumnType::Categorical,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Categorical(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A read-only table of named, uniformly-typed columns. Rows align by
/// position across columns.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<(String, Column)>,
}

impl Dataset {
    /// Build a dataset from pre-typed columns. All columns must have the
    /// same number of rows.
    pub fn from_columns(columns: Vec<(String, Column)>) -> Result<Self> {
        if let Some((first_name, first)) = columns.first() {
            let expected = first.len();
            for (name, column) in &columns {
                if column.len() != expected {
                    return Err(anyhow!(
                        "Column '{}' has {} rows but '{}' has {}",
                        name,
                        column.len(),
                        first_name,
                        expected
                    ));
                }
            }
        }
        Ok(Dataset { columns })
    }

    /// Create a dataset from parsed CSV, inferring each column's type.
    pub fn from_csv(csv: CsvData) -> Result<Self> {
        Self::from_string_table(csv.headers, csv.rows)
    }

    /// Create a dataset from a JSON array of objects.
    pub fn from_json(value: &Value) -> Result<Self> {
        let array = value
            .as_array()
            .ok_or_else(|| anyhow!("Input data must be a JSON array of objects"))?;

        if array.is_empty() {
            return Err(anyhow!("Input data array is empty"));
        }

        // Extract headers from the first object
        let first_obj = array[0]
            .as_object()
            .ok_or_else(|| anyhow!("Items in array must be objects"))?;

        let headers: Vec<String> = first_obj.keys().cloned().collect();

        let mut rows = Vec::new();
        for item in array {
            let obj = item
                .as_object()
                .ok_or_else(|| anyhow!("Items in array must be objects"))?;

            let mut row = Vec::new();
            for header in &headers {
                let val_str = match obj.get(header) {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    Some(Value::Bool(b)) => b.to_string(),
                    Some(Value::Null) | None => "".to_string(),
                    _ => return Err(anyhow!("Unsupported value type for field '{}'", header)),
                };
                row.push(val_str);
            }
            rows.push(row);
        }

        Self::from_string_table(headers, rows)
    }

    fn from_string_table(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                return Err(anyhow!(
                    "Row {} has {} fields, expected {}",
                    i + 1,
                    row.len(),
                    headers.len()
                ));
            }
        }

        let mut columns = Vec::with_capacity(headers.len());
        for (idx, name) in headers.into_iter().enumerate() {
            let raw: Vec<Option<String>> = rows
                .iter()
                .map(|row| {
                    let cell = row[idx].trim();
                    if cell.is_empty() {
                        None
                    } else {
                        Some(cell.to_string())
                    }
                })
                .collect();
            columns.push((name, infer_column(raw)));
        }

        Ok(Dataset { columns })
    }

    /// Look up a column by name (ASCII case-insensitive, first match wins).
    /// Returns the canonical header name alongside the column.
    pub fn column(&self, name: &str) -> Option<(&str, &Column)> {
        self.columns
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(n, c)| (n.as_str(), c))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |(_, c)| c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify raw cells: a column is categorical iff some present value does
/// not parse as a number.
fn infer_column(raw: Vec<Option<String>>) -> Column {
    let numeric = raw
        .iter()
        .flatten()
        .all(|cell| cell.parse::<f64>().is_ok());

    if numeric {
        Column::Numeric(
            raw.into_iter()
                .map(|cell| cell.and_then(|s| s.parse().ok()))
                .collect(),
        )
    } else {
        Column::Categorical(raw)
    }
}
