//! Integration tests for the bias monitoring pipeline.
//!
//! These exercise the full flow end-to-end with a stub metrics backend:
//! job validation, categorical coercion, disparity and group computation,
//! and the merge into one report.

use bias_monitor::{
    BiasMonitor, DataBatch, JobContext, MetricMap, MetricsBackend, MonitorConfig, MonitorError,
    MonitoringParameters,
};
use pretty_assertions::assert_eq;
use serde_json::json;

/// Stub backend returning fixed, disjoint metric collections. The bias side
/// echoes the protected-class values it was handed so tests can observe what
/// reached the backend after coercion.
struct StubBackend;

impl MetricsBackend for StubBackend {
    fn bias_metrics(
        &self,
        batch: &DataBatch,
        params: &MonitoringParameters,
        test: &str,
    ) -> Result<MetricMap, MonitorError> {
        if params.protected_classes.is_empty() {
            return Err(MonitorError::schema("no protected classes to analyze"));
        }
        let mut map = MetricMap::new();
        map.insert("bias_test".to_string(), json!(test));
        for class in &params.protected_classes {
            let values = batch.column_values(class)?;
            map.insert(format!("{class}_values"), json!(values));
        }
        map.insert("ppr_disparity".to_string(), json!(0.82));
        Ok(map)
    }

    fn group_metrics(
        &self,
        _batch: &DataBatch,
        _params: &MonitoringParameters,
        test: &str,
    ) -> Result<MetricMap, MonitorError> {
        let mut map = MetricMap::new();
        map.insert("group_test".to_string(), json!(test));
        map.insert("fpr_male".to_string(), json!(0.12));
        map.insert("fpr_female".to_string(), json!(0.2));
        Ok(map)
    }
}

/// Backend that always fails, for propagation tests.
struct FailingBackend;

impl MetricsBackend for FailingBackend {
    fn bias_metrics(
        &self,
        _batch: &DataBatch,
        _params: &MonitoringParameters,
        _test: &str,
    ) -> Result<MetricMap, MonitorError> {
        Err(MonitorError::metric(
            "protected class has a single distinct value",
        ))
    }

    fn group_metrics(
        &self,
        _batch: &DataBatch,
        _params: &MonitoringParameters,
        _test: &str,
    ) -> Result<MetricMap, MonitorError> {
        unreachable!("bias computation fails first")
    }
}

fn scoring_job() -> JobContext {
    JobContext::init(json!({
        "job_id": "j-100",
        "input_schema": {
            "fields": [
                {"name": "gender", "data_class": "categorical", "protected_class": true},
                {"name": "age_group", "data_class": "numerical", "protected_class": true},
                {"name": "score", "data_class": "numerical", "role": "score"},
                {"name": "label", "data_class": "numerical", "role": "label"}
            ]
        }
    }))
    .expect("valid job description")
}

fn scored_batch() -> DataBatch {
    DataBatch::new(
        vec![
            "gender".into(),
            "age_group".into(),
            "score".into(),
            "label".into(),
        ],
        vec![
            vec![json!("male"), json!(1), json!(0.72), json!(1)],
            vec![json!("female"), json!(2), json!(0.31), json!(0)],
            vec![json!("female"), json!(3), json!(0.88), json!(1)],
            vec![json!("male"), json!(2), json!(0.05), json!(0)],
        ],
    )
}

#[test]
fn test_end_to_end_metrics() {
    let job = scoring_job();
    let backend = StubBackend;
    let monitor = BiasMonitor::new(&job, &backend);

    let report = monitor.compute(&scored_batch()).unwrap();

    assert_eq!(report.job_id, "j-100");
    // Both collections land in the merged output.
    assert_eq!(report.metrics["bias_test"], json!("aequitas_bias"));
    assert_eq!(report.metrics["group_test"], json!("aequitas_group"));
    assert_eq!(report.metrics["ppr_disparity"], json!(0.82));
    assert_eq!(report.metrics["fpr_female"], json!(0.2));

    // The backend saw age_group as strings and gender untouched.
    assert_eq!(
        report.metrics["age_group_values"],
        json!(["1", "2", "3", "2"])
    );
    assert_eq!(
        report.metrics["gender_values"],
        json!(["male", "female", "female", "male"])
    );
}

#[test]
fn test_row_count_does_not_change_report_shape() {
    let job = scoring_job();
    let backend = StubBackend;
    let monitor = BiasMonitor::new(&job, &backend);

    let small = monitor.compute(&scored_batch()).unwrap();

    let mut batch = scored_batch();
    batch
        .rows
        .push(vec![json!("female"), json!(1), json!(0.5), json!(1)]);
    batch.total_rows = batch.rows.len();
    let large = monitor.compute(&batch).unwrap();

    let small_keys: Vec<&String> = small.metrics.keys().collect();
    let large_keys: Vec<&String> = large.metrics.keys().collect();
    assert_eq!(small_keys, large_keys);
}

#[test]
fn test_custom_test_names_reach_backend() {
    let job = scoring_job();
    let backend = StubBackend;
    let config: MonitorConfig = serde_json::from_value(json!({
        "tests": {"bias_test": "custom_bias", "group_test": "custom_group"}
    }))
    .unwrap();
    let monitor = BiasMonitor::with_config(&job, &backend, config);

    let report = monitor.compute(&scored_batch()).unwrap();
    assert_eq!(report.metrics["bias_test"], json!("custom_bias"));
    assert_eq!(report.metrics["group_test"], json!("custom_group"));
}

#[test]
fn test_missing_protected_column_fails_request() {
    let job = scoring_job();
    let backend = StubBackend;
    let monitor = BiasMonitor::new(&job, &backend);

    let batch = DataBatch::new(
        vec!["gender".into(), "score".into(), "label".into()],
        vec![vec![json!("male"), json!(0.5), json!(1)]],
    );
    let err = monitor.compute(&batch).unwrap_err();
    assert!(matches!(err, MonitorError::MissingColumn(_)));
    assert!(err.to_string().contains("age_group"));
}

#[test]
fn test_backend_failure_propagates_unchanged() {
    let job = scoring_job();
    let backend = FailingBackend;
    let monitor = BiasMonitor::new(&job, &backend);

    let err = monitor.compute(&scored_batch()).unwrap_err();
    assert!(matches!(err, MonitorError::Metric(_)));
    assert!(err.to_string().contains("single distinct value"));
}

#[test]
fn test_zero_protected_classes_fails_at_init() {
    let err = JobContext::init(json!({
        "input_schema": {
            "fields": [
                {"name": "score", "data_class": "numerical", "role": "score"},
                {"name": "label", "data_class": "numerical", "role": "label"}
            ]
        }
    }))
    .unwrap_err();
    assert!(matches!(err, MonitorError::Schema(_)));
}

#[test]
fn test_compute_iter_yields_exactly_one_report() {
    let job = scoring_job();
    let backend = StubBackend;
    let monitor = BiasMonitor::new(&job, &backend);

    let batch = scored_batch();
    let mut iter = monitor.compute_iter(&batch);
    assert!(iter.next().unwrap().is_ok());
    assert!(iter.next().is_none());
}

#[test]
fn test_report_round_trips_through_json() {
    let job = scoring_job();
    let backend = StubBackend;
    let monitor = BiasMonitor::new(&job, &backend);

    let report = monitor.compute(&scored_batch()).unwrap();
    let payload = serde_json::to_string(&report).unwrap();
    let parsed: bias_monitor::MetricsReport = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed.metrics, report.metrics);
}
