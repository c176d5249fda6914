//! Metrics orchestration over a scored dataset.

use crate::config::MonitorConfig;
use crate::data::DataBatch;
use crate::error::MonitorError;
use crate::job::JobContext;
use crate::monitors::backend::MetricsBackend;
use crate::monitors::coercion::force_categorical;
use crate::report::{MetricsReport, merge};

/// Orchestrates bias (disparity) and group metric computation for one job.
///
/// The pipeline is linear, once per dataset: coerce protected-class columns
/// to categorical form, compute disparity metrics, compute group metrics,
/// merge. There is no retry, no partial-failure handling, and no
/// cancellation path; any failure propagates directly to the caller.
pub struct BiasMonitor<'a, B: MetricsBackend> {
    job: &'a JobContext,
    backend: &'a B,
    config: MonitorConfig,
}

impl<'a, B: MetricsBackend> BiasMonitor<'a, B> {
    pub fn new(job: &'a JobContext, backend: &'a B) -> Self {
        Self {
            job,
            backend,
            config: MonitorConfig::default(),
        }
    }

    pub fn with_config(job: &'a JobContext, backend: &'a B, config: MonitorConfig) -> Self {
        Self {
            job,
            backend,
            config,
        }
    }

    /// Compute the merged bias and group metrics for one dataset.
    ///
    /// Protected-class presence is enforced at [`JobContext::init`]; this
    /// method does not re-validate it, and a degenerate parameter set is the
    /// backend's to reject.
    pub fn compute(&self, batch: &DataBatch) -> Result<MetricsReport, MonitorError> {
        let params = self.job.params();

        let coerced = force_categorical(batch, &params.protected_classes, &self.config.coercion)?;

        tracing::info!(
            job_id = %self.job.job_id(),
            rows = coerced.row_count(),
            bias_test = %self.config.tests.bias_test,
            group_test = %self.config.tests.group_test,
            "computing bias and group metrics"
        );

        let bias = self
            .backend
            .bias_metrics(&coerced, params, &self.config.tests.bias_test)?;
        let group = self
            .backend
            .group_metrics(&coerced, params, &self.config.tests.group_test)?;

        Ok(MetricsReport::new(self.job.job_id(), merge(bias, group)))
    }

    /// Lazy single-item sequence over [`Self::compute`], for harnesses that
    /// splice one computation per dataset into a streaming pipeline.
    pub fn compute_iter<'b>(
        &'b self,
        batch: &'b DataBatch,
    ) -> impl Iterator<Item = Result<MetricsReport, MonitorError>> + 'b {
        std::iter::once_with(move || self.compute(batch))
    }
}
