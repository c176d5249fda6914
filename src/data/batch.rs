//! Tabular data batch.

use crate::error::MonitorError;
use serde::{Deserialize, Serialize};

/// A batch of data rows with named columns.
///
/// Row order is irrelevant for aggregate metrics; cells are JSON values so a
/// column can hold numbers, strings, booleans, or nulls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataBatch {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
    pub total_rows: usize,
}

impl DataBatch {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<serde_json::Value>>) -> Self {
        let total_rows = rows.len();
        Self {
            columns,
            rows,
            total_rows,
        }
    }

    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            total_rows: 0,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Index of a named column. A missing column is an error, never skipped.
    pub fn column_index(&self, name: &str) -> Result<usize, MonitorError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| MonitorError::missing_column(name.to_string()))
    }

    /// All values of a named column, in row order. Short rows read as null.
    pub fn column_values(&self, name: &str) -> Result<Vec<serde_json::Value>, MonitorError> {
        let idx = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).cloned().unwrap_or(serde_json::Value::Null))
            .collect())
    }
}
