use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `rulegate.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy. Validation happens at resolve time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RulegateConfigV1 {
    /// Optional schema string for tooling (`rulegate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Minimum severity that fails the run: `info`, `warn`, or `fail`.
    /// Absent means `fail` (only hard failures abort the run).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,
}
