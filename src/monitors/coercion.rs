//! Categorical coercion of protected-class columns.

use crate::config::CoercionConfig;
use crate::data::batch::DataBatch;
use crate::data::types::{ValueKind, column_kind};
use crate::error::MonitorError;

/// Rewrite numerically typed protected-class columns as strings.
///
/// The downstream metrics backend treats numeric columns as continuous
/// variables, which is wrong for attributes like an integer-coded age group
/// or region code; string-typing the values forces categorical treatment.
///
/// Returns a new batch; the input is never mutated. Already-categorical
/// columns pass through value-for-value, and columns outside the
/// protected-class list are never touched. A protected-class column absent
/// from the batch is an error, not a silent skip.
pub fn force_categorical(
    batch: &DataBatch,
    protected_classes: &[String],
    config: &CoercionConfig,
) -> Result<DataBatch, MonitorError> {
    let mut coerced = batch.clone();

    for name in protected_classes {
        let idx = coerced.column_index(name)?;

        let coerce = match column_kind(&coerced, idx) {
            ValueKind::Numeric => true,
            ValueKind::Boolean => config.coerce_booleans,
            ValueKind::Categorical | ValueKind::Null => false,
        };
        if !coerce {
            continue;
        }

        tracing::debug!(column = %name, "coercing protected class to categorical");
        for row in &mut coerced.rows {
            if let Some(cell) = row.get_mut(idx) {
                *cell = stringify(cell);
            }
        }
    }

    Ok(coerced)
}

/// String rendering of a scalar cell. Nulls stay null.
fn stringify(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Null => serde_json::Value::Null,
        serde_json::Value::String(_) => value.clone(),
        serde_json::Value::Number(n) => serde_json::Value::String(n.to_string()),
        serde_json::Value::Bool(b) => serde_json::Value::String(b.to_string()),
        other => serde_json::Value::String(other.to_string()),
    }
}
