//! Fairness-metrics backend interface.

use crate::data::DataBatch;
use crate::error::MonitorError;
use crate::schema::MonitoringParameters;

/// A collection of named metric values.
pub type MetricMap = serde_json::Map<String, serde_json::Value>;

/// Computes disparity and group metrics over a dataset.
///
/// Implementations own the statistical methodology; the monitor only
/// orchestrates. `test` names a predefined test understood by the backend
/// (e.g. `"aequitas_bias"`). Backend failures propagate to the caller
/// unchanged — the monitor performs no suppression or retry.
pub trait MetricsBackend {
    /// Compute disparity (bias) metrics for a named predefined test.
    fn bias_metrics(
        &self,
        batch: &DataBatch,
        params: &MonitoringParameters,
        test: &str,
    ) -> Result<MetricMap, MonitorError>;

    /// Compute per-group outcome metrics for a named predefined test.
    fn group_metrics(
        &self,
        batch: &DataBatch,
        params: &MonitoringParameters,
        test: &str,
    ) -> Result<MetricMap, MonitorError>;
}
