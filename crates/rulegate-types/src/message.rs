use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kinds of messages forwarded to the reporting sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// One per-violation line, emitted for every (result, artifact) pair.
    RuleEngine,
    /// The single overall-failure digest emitted when the run fails.
    ProcessingFailure,
}
