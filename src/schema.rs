//! Job description schema extraction and validation.
//!
//! A job description is a JSON mapping whose `input_schema` field carries the
//! declared dataset schema, either embedded as an object or as a JSON-encoded
//! string. Monitoring parameters (protected classes, score and label columns)
//! are derived from the declared field roles.

use crate::error::MonitorError;
use serde::{Deserialize, Serialize};

/// Declared semantic type of a dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataClass {
    Numerical,
    Categorical,
    Text,
}

/// Role a column plays in the scoring job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    Score,
    Label,
    Predictor,
    Identifier,
}

/// Declared schema for a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub data_class: DataClass,
    #[serde(default = "default_role")]
    pub role: FieldRole,
    #[serde(default)]
    pub protected_class: bool,
}

fn default_role() -> FieldRole {
    FieldRole::Predictor
}

/// The declared input schema of a scoring job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSchema {
    pub fields: Vec<FieldSchema>,
}

/// Monitoring parameters derived from an input schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringParameters {
    /// Protected-class column names, in declaration order.
    pub protected_classes: Vec<String>,
    pub score_column: String,
    pub label_column: String,
}

/// Extract the declared input schema from a job description.
///
/// The `input_schema` field may be a JSON object or a JSON-encoded string.
pub fn extract_input_schema(job_json: &serde_json::Value) -> Result<InputSchema, MonitorError> {
    let raw = job_json
        .get("input_schema")
        .ok_or_else(|| MonitorError::schema("job description has no input_schema"))?;

    let schema: InputSchema = match raw {
        serde_json::Value::String(encoded) => serde_json::from_str(encoded)
            .map_err(|e| MonitorError::schema(format!("unparseable input_schema: {e}")))?,
        other => serde_json::from_value(other.clone())
            .map_err(|e| MonitorError::schema(format!("unparseable input_schema: {e}")))?,
    };

    if schema.fields.is_empty() {
        return Err(MonitorError::schema("input_schema declares no fields"));
    }

    Ok(schema)
}

/// Derive monitoring parameters from a declared schema.
///
/// With `check_schema`, fails when the schema declares no protected classes,
/// no score column, or no label column. Without it, missing roles come back
/// as empty strings and an empty protected-class list is tolerated.
pub fn monitoring_parameters(
    schema: &InputSchema,
    check_schema: bool,
) -> Result<MonitoringParameters, MonitorError> {
    let protected_classes: Vec<String> = schema
        .fields
        .iter()
        .filter(|f| f.protected_class)
        .map(|f| f.name.clone())
        .collect();

    let score_column = schema
        .fields
        .iter()
        .find(|f| f.role == FieldRole::Score)
        .map(|f| f.name.clone());

    let label_column = schema
        .fields
        .iter()
        .find(|f| f.role == FieldRole::Label)
        .map(|f| f.name.clone());

    if check_schema {
        if protected_classes.is_empty() {
            return Err(MonitorError::schema(
                "input_schema declares no protected classes",
            ));
        }
        if score_column.is_none() {
            return Err(MonitorError::schema("input_schema declares no score column"));
        }
        if label_column.is_none() {
            return Err(MonitorError::schema("input_schema declares no label column"));
        }
    }

    Ok(MonitoringParameters {
        protected_classes,
        score_column: score_column.unwrap_or_default(),
        label_column: label_column.unwrap_or_default(),
    })
}

/// Validate a job description, failing fast on schema defects.
pub fn validate(job_json: &serde_json::Value) -> Result<InputSchema, MonitorError> {
    let schema = extract_input_schema(job_json)?;
    monitoring_parameters(&schema, true)?;
    Ok(schema)
}
