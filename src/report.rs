//! Merged metrics output payload.

use crate::monitors::backend::MetricMap;
use serde::{Deserialize, Serialize};

/// The merged disparity and group metrics for one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    pub job_id: String,
    pub computed_at: chrono::DateTime<chrono::Utc>,
    pub metrics: MetricMap,
}

impl MetricsReport {
    pub fn new(job_id: impl Into<String>, metrics: MetricMap) -> Self {
        Self {
            job_id: job_id.into(),
            computed_at: chrono::Utc::now(),
            metrics,
        }
    }
}

/// Merge two metric collections. On a shared key the second collection wins;
/// by backend contract the two collections should be disjoint.
pub fn merge(mut base: MetricMap, other: MetricMap) -> MetricMap {
    for (key, value) in other {
        base.insert(key, value);
    }
    base
}
