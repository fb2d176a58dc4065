//! Tabular signal ingestion
//!
//! Loads a single sample sequence from a delimited table. Text columns
//! (timestamps, labels) are skipped, never coerced; the sample sequence is the
//! first fully numeric column, or the column named by the caller.

use std::path::Path;

use crate::error::{AnalysisError, Result};

/// Supported input table formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Csv,
    Tsv,
    Ascii,
}

/// Extensions accepted by [`FileType::from_extension`]
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "tsv", "txt", "ascii", "dat"];

impl FileType {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "tsv" => Some(Self::Tsv),
            "txt" | "ascii" | "dat" => Some(Self::Ascii),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }
}

/// A parsed table: column names plus cells in column-major order.
/// `None` marks a cell that is empty or does not parse as a finite number.
#[derive(Debug, Clone)]
struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<Option<f64>>>,
}

/// Load the sample sequence from a delimited table.
///
/// With `channel` set, the column of that name is selected and must be
/// numeric. Otherwise the first fully numeric column is used, matching the
/// original single-channel behavior.
pub fn load_signal(path: &str, channel: Option<&str>) -> Result<Vec<f64>> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(AnalysisError::FileNotFound(path.to_string()));
    }

    let file_type = FileType::from_path(p).ok_or_else(|| {
        let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
        AnalysisError::UnsupportedFileType(format!(
            "'{}' (supported: {})",
            ext,
            SUPPORTED_EXTENSIONS.join(", ")
        ))
    })?;

    let table = match file_type {
        FileType::Csv => read_delimited(p, b',')?,
        FileType::Tsv => read_delimited(p, b'\t')?,
        FileType::Ascii => read_whitespace(p)?,
    };

    log::debug!(
        "Loaded table: {} columns × {} rows",
        table.columns.len(),
        table.columns.first().map(|c| c.len()).unwrap_or(0)
    );

    let signal = select_channel(&table, channel, path)?;
    if signal.len() < 2 {
        return Err(AnalysisError::ParseError(format!(
            "signal must contain at least 2 samples, got {}",
            signal.len()
        )));
    }
    Ok(signal)
}

fn read_delimited(path: &Path, delimiter: u8) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| AnalysisError::ParseError(e.to_string()))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AnalysisError::ParseError(e.to_string()))?;
        rows.push(record.iter().map(|s| s.trim().to_string()).collect());
    }
    build_table(rows)
}

/// Whitespace-delimited ASCII: `#` comment lines and blank lines are skipped.
fn read_whitespace(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        rows.push(line.split_whitespace().map(|s| s.to_string()).collect());
    }
    build_table(rows)
}

fn build_table(rows: Vec<Vec<String>>) -> Result<Table> {
    if rows.is_empty() {
        return Err(AnalysisError::ParseError("input table is empty".to_string()));
    }

    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);

    // Header sniffing: any non-numeric cell in the first row makes it a header
    // row; an all-numeric first row is data, so no sample is lost.
    let has_header = rows[0].iter().any(|cell| parse_cell(cell).is_none());
    let (headers, data_start) = if has_header {
        let headers = (0..width)
            .map(|i| {
                rows[0]
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| format!("col{}", i))
            })
            .collect();
        (headers, 1)
    } else {
        ((0..width).map(|i| format!("col{}", i)).collect(), 0)
    };

    let mut columns: Vec<Vec<Option<f64>>> =
        vec![Vec::with_capacity(rows.len() - data_start); width];
    for row in &rows[data_start..] {
        for (i, column) in columns.iter_mut().enumerate() {
            column.push(row.get(i).and_then(|cell| parse_cell(cell)));
        }
    }

    Ok(Table { headers, columns })
}

fn parse_cell(cell: &str) -> Option<f64> {
    let value = cell.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

fn select_channel(table: &Table, channel: Option<&str>, path: &str) -> Result<Vec<f64>> {
    match channel {
        Some(name) => {
            let idx = table
                .headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| {
                    AnalysisError::InvalidParameter(format!(
                        "Channel '{}' not found; available columns: {}",
                        name,
                        table.headers.join(", ")
                    ))
                })?;
            numeric_column(&table.columns[idx]).ok_or_else(|| {
                AnalysisError::NoNumericData(format!("channel '{}' of {}", name, path))
            })
        }
        None => table
            .columns
            .iter()
            .find_map(|col| numeric_column(col))
            .ok_or_else(|| AnalysisError::NoNumericData(path.to_string())),
    }
}

/// A column qualifies as numeric only when it is non-empty and every cell
/// parses as a finite number.
fn numeric_column(cells: &[Option<f64>]) -> Option<Vec<f64>> {
    if cells.is_empty() {
        return None;
    }
    cells.iter().copied().collect()
}
