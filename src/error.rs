//! Error types for the bias-monitor crate.

use thiserror::Error;

/// Top-level error type for monitoring operations.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Metric computation error: {0}")]
    Metric(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl MonitorError {
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    pub fn missing_column(msg: impl Into<String>) -> Self {
        Self::MissingColumn(msg.into())
    }

    pub fn metric(msg: impl Into<String>) -> Self {
        Self::Metric(msg.into())
    }

    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }
}
