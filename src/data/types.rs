//! Runtime classification of column values.

use crate::data::batch::DataBatch;
use serde::{Deserialize, Serialize};

/// Observed kind of a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Numeric,
    Boolean,
    Categorical,
    /// No rows, or only nulls.
    Null,
}

/// Classify a column from its non-null values.
///
/// Any string (or other non-scalar) value makes the column categorical;
/// otherwise numbers win over booleans. A column with no rows or only nulls
/// classifies as [`ValueKind::Null`].
pub fn column_kind(batch: &DataBatch, idx: usize) -> ValueKind {
    let mut has_number = false;
    let mut has_bool = false;
    let mut has_other = false;

    for row in &batch.rows {
        match row.get(idx) {
            Some(serde_json::Value::Number(_)) => has_number = true,
            Some(serde_json::Value::Bool(_)) => has_bool = true,
            Some(serde_json::Value::Null) | None => {}
            Some(_) => has_other = true,
        }
    }

    if has_other {
        ValueKind::Categorical
    } else if has_number {
        ValueKind::Numeric
    } else if has_bool {
        ValueKind::Boolean
    } else {
        ValueKind::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn batch_of(rows: Vec<Vec<serde_json::Value>>) -> DataBatch {
        DataBatch::new(vec!["c".into()], rows)
    }

    #[test]
    fn test_numeric_column() {
        let batch = batch_of(vec![vec![json!(1)], vec![json!(2.5)]]);
        assert_eq!(column_kind(&batch, 0), ValueKind::Numeric);
    }

    #[test]
    fn test_categorical_column() {
        let batch = batch_of(vec![vec![json!("male")], vec![json!("female")]]);
        assert_eq!(column_kind(&batch, 0), ValueKind::Categorical);
    }

    #[test]
    fn test_mixed_column_is_categorical() {
        let batch = batch_of(vec![vec![json!("1")], vec![json!(2)]]);
        assert_eq!(column_kind(&batch, 0), ValueKind::Categorical);
    }

    #[test]
    fn test_boolean_column() {
        let batch = batch_of(vec![vec![json!(true)], vec![json!(false)]]);
        assert_eq!(column_kind(&batch, 0), ValueKind::Boolean);
    }

    #[test]
    fn test_nulls_are_skipped() {
        let batch = batch_of(vec![vec![json!(null)], vec![json!(3)]]);
        assert_eq!(column_kind(&batch, 0), ValueKind::Numeric);
    }

    #[test]
    fn test_empty_and_all_null_columns() {
        assert_eq!(column_kind(&batch_of(vec![]), 0), ValueKind::Null);
        let batch = batch_of(vec![vec![json!(null)]]);
        assert_eq!(column_kind(&batch, 0), ValueKind::Null);
    }
}
