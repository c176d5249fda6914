//! # bias-monitor — fairness metrics orchestration for scored datasets
//!
//! Computes bias (disparity) and group-outcome metrics over a scored dataset,
//! partitioned by protected-class attributes (e.g. gender, race). The job
//! description declares which columns are protected classes, scores, and
//! ground-truth labels; the statistical methodology itself lives behind the
//! [`MetricsBackend`] trait.
//!
//! Pipeline: validate the job description once ([`JobContext::init`]), then
//! per dataset: coerce numerically coded protected-class columns to
//! categorical form, compute disparity metrics, compute group metrics, and
//! merge the two collections into one report.

pub mod config;
pub mod data;
pub mod error;
pub mod job;
pub mod monitors;
pub mod report;
pub mod schema;
pub mod telemetry;

pub use config::{CoercionConfig, MonitorConfig, TestSelection};
pub use data::{CsvSource, DataBatch, DataSource, JsonlSource, ValueKind};
pub use error::MonitorError;
pub use job::JobContext;
pub use monitors::{BiasMonitor, MetricMap, MetricsBackend, force_categorical};
pub use report::{MetricsReport, merge};
pub use schema::{DataClass, FieldRole, FieldSchema, InputSchema, MonitoringParameters};
