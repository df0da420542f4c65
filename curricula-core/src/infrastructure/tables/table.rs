// curricula-core/src/infrastructure/tables/table.rs

use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// A CSV file held in memory as text cells.
///
/// Cells are decoded lossily so that stray non-UTF-8 bytes in catalog exports do not
/// abort a run. Short rows read as blank cells.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub origin: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            origin: "<memory>".to_string(),
            headers,
            rows,
        }
    }

    /// Index of a required column.
    pub fn column(&self, name: &str) -> Result<usize, InfrastructureError> {
        self.optional_column(name)
            .ok_or_else(|| InfrastructureError::MissingInputColumn {
                column: name.to_string(),
                path: self.origin.clone(),
            })
    }

    pub fn optional_column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn cell<'a>(row: &'a [String], idx: usize) -> &'a str {
        row.get(idx).map(String::as_str).unwrap_or("")
    }
}

pub fn read_table(path: &Path) -> Result<Table, InfrastructureError> {
    let origin = path.display().to_string();
    let unreadable = |reason: String| InfrastructureError::UnreadableSource {
        path: origin.clone(),
        reason,
    };

    let file = File::open(path).map_err(|e| unreadable(e.to_string()))?;
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

    let mut headers: Vec<String> = reader
        .byte_headers()
        .map_err(|e| unreadable(e.to_string()))?
        .iter()
        .map(lossy)
        .collect();
    if let Some(first) = headers.first_mut() {
        *first = first.trim_start_matches('\u{feff}').to_string();
    }

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(|e| unreadable(e.to_string()))?;
        rows.push(record.iter().map(lossy).collect());
    }

    debug!(path = %origin, rows = rows.len(), "Table loaded");
    Ok(Table {
        origin,
        headers,
        rows,
    })
}

/// Serializes `rows` as CSV, optionally preceded by `headers`. Every row is written
/// with exactly `headers.len()` cells.
pub fn render_table<H, R>(
    headers: &[H],
    rows: R,
    include_header: bool,
) -> Result<Vec<u8>, InfrastructureError>
where
    H: AsRef<str>,
    R: IntoIterator<Item = Vec<String>>,
{
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    if include_header {
        let names: Vec<&str> = headers.iter().map(|h| h.as_ref()).collect();
        writer.write_record(&names)?;
    }
    // Ragged rows from the lenient reader are padded (or cut) to the header width.
    for mut row in rows {
        row.resize(headers.len(), String::new());
        writer.write_record(&row)?;
    }
    writer
        .into_inner()
        .map_err(|e| InfrastructureError::Io(e.into_error()))
}

pub fn write_table<H, R>(path: &Path, headers: &[H], rows: R) -> Result<(), InfrastructureError>
where
    H: AsRef<str>,
    R: IntoIterator<Item = Vec<String>>,
{
    let content = render_table(headers, rows, true)?;
    atomic_write(path, content)
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
