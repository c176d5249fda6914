//! Data source abstraction for loading datasets from files.

use crate::data::batch::DataBatch;
use crate::error::MonitorError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Trait for loading tabular data from a source.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Load data from this source, optionally limiting the number of rows.
    async fn load(&self, limit: Option<usize>) -> Result<DataBatch, MonitorError>;
}

// ---------------------------------------------------------------------------
// CsvSource
// ---------------------------------------------------------------------------

/// CSV file data source. The first row is the header.
pub struct CsvSource {
    pub path: PathBuf,
    pub delimiter: char,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: ',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

#[async_trait]
impl DataSource for CsvSource {
    async fn load(&self, limit: Option<usize>) -> Result<DataBatch, MonitorError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let mut lines = content.lines();

        let columns: Vec<String> = lines
            .next()
            .ok_or_else(|| MonitorError::dataset("empty CSV file"))?
            .split(self.delimiter)
            .map(|s| s.trim().trim_matches('"').to_string())
            .collect();

        let mut rows = Vec::new();
        for (line_no, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(max) = limit {
                if rows.len() >= max {
                    break;
                }
            }
            let row: Vec<serde_json::Value> = line
                .split(self.delimiter)
                .map(|s| parse_cell(s.trim().trim_matches('"')))
                .collect();
            if row.len() != columns.len() {
                return Err(MonitorError::dataset(format!(
                    "row {} has {} cells, expected {}",
                    line_no + 2,
                    row.len(),
                    columns.len()
                )));
            }
            rows.push(row);
        }

        tracing::debug!(path = %self.path.display(), rows = rows.len(), "loaded CSV");
        Ok(DataBatch::new(columns, rows))
    }
}

/// Parse a CSV cell into a typed value so declared-numeric columns arrive
/// numeric. Empty cells read as null.
fn parse_cell(raw: &str) -> serde_json::Value {
    if raw.is_empty() {
        return serde_json::Value::Null;
    }
    if let Ok(i) = raw.parse::<i64>() {
        return serde_json::Value::from(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return serde_json::Value::Number(n);
        }
    }
    match raw {
        "true" => serde_json::Value::Bool(true),
        "false" => serde_json::Value::Bool(false),
        _ => serde_json::Value::String(raw.to_string()),
    }
}

// ---------------------------------------------------------------------------
// JsonlSource
// ---------------------------------------------------------------------------

/// JSON-lines data source, one object per line. Column order follows the
/// first object; fields absent from a later line read as null.
pub struct JsonlSource {
    pub path: PathBuf,
}

impl JsonlSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for JsonlSource {
    async fn load(&self, limit: Option<usize>) -> Result<DataBatch, MonitorError> {
        let content = tokio::fs::read_to_string(&self.path).await?;

        let mut columns: Vec<String> = Vec::new();
        let mut rows = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(max) = limit {
                if rows.len() >= max {
                    break;
                }
            }
            let obj: serde_json::Map<String, serde_json::Value> = serde_json::from_str(line)
                .map_err(|e| {
                    MonitorError::dataset(format!("bad JSONL line {}: {e}", line_no + 1))
                })?;
            if columns.is_empty() {
                columns = obj.keys().cloned().collect();
            }
            let row = columns
                .iter()
                .map(|c| obj.get(c).cloned().unwrap_or(serde_json::Value::Null))
                .collect();
            rows.push(row);
        }

        if columns.is_empty() {
            return Err(MonitorError::dataset("empty JSONL file"));
        }

        tracing::debug!(path = %self.path.display(), rows = rows.len(), "loaded JSONL");
        Ok(DataBatch::new(columns, rows))
    }
}
