//! Job context — the validated job description handle.

use crate::error::MonitorError;
use crate::schema::{self, InputSchema, MonitoringParameters};

/// A validated scoring job description.
///
/// Construction validates the declared schema eagerly, so an unusable job
/// description never yields a context. Re-initialization is constructing a
/// new context; holders of the old one are unaffected, and multiple contexts
/// can coexist.
#[derive(Debug, Clone)]
pub struct JobContext {
    job_id: String,
    raw: serde_json::Value,
    input_schema: InputSchema,
    params: MonitoringParameters,
}

impl JobContext {
    /// Validate a job description and build the context.
    ///
    /// Fails fast on schema defects: unparseable schema, zero protected
    /// classes, missing score or label column.
    pub fn init(job_json: serde_json::Value) -> Result<Self, MonitorError> {
        let input_schema = schema::validate(&job_json)?;
        let params = schema::monitoring_parameters(&input_schema, true)?;

        let job_id = job_json
            .get("job_id")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        tracing::info!(
            job_id = %job_id,
            protected_classes = params.protected_classes.len(),
            "job description validated"
        );

        Ok(Self {
            job_id,
            raw: job_json,
            input_schema,
            params,
        })
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    /// The job description as supplied at initialization.
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    pub fn input_schema(&self) -> &InputSchema {
        &self.input_schema
    }

    pub fn params(&self) -> &MonitoringParameters {
        &self.params
    }
}
