//! Configuration types for the bias monitor.

use serde::{Deserialize, Serialize};

/// Top-level monitor configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Predefined tests requested from the metrics backend.
    #[serde(default)]
    pub tests: TestSelection,
    /// Categorical coercion policy for protected-class columns.
    #[serde(default)]
    pub coercion: CoercionConfig,
}

/// Names of the predefined tests requested from the metrics backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSelection {
    /// Disparity (bias) test name.
    #[serde(default = "default_bias_test")]
    pub bias_test: String,
    /// Group-outcome test name.
    #[serde(default = "default_group_test")]
    pub group_test: String,
}

impl Default for TestSelection {
    fn default() -> Self {
        Self {
            bias_test: default_bias_test(),
            group_test: default_group_test(),
        }
    }
}

fn default_bias_test() -> String {
    "aequitas_bias".to_string()
}

fn default_group_test() -> String {
    "aequitas_group".to_string()
}

/// Policy for coercing protected-class columns to categorical form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoercionConfig {
    /// Treat boolean-valued columns as numerically coded and stringify them.
    #[serde(default = "default_true")]
    pub coerce_booleans: bool,
}

impl Default for CoercionConfig {
    fn default() -> Self {
        Self {
            coerce_booleans: true,
        }
    }
}

fn default_true() -> bool {
    true
}
