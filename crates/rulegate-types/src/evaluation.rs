use crate::artifact::ArtifactHandle;
use crate::severity::Severity;

/// One rule's verdict: identifier, severity, description, flagged artifacts.
///
/// Immutable once produced by the rule engine. The `id` is unique within a
/// run. A result with no flagged artifacts is inert: it never enters a
/// severity bucket, the failing set, or any report output.
#[derive(Clone, Debug)]
pub struct EvaluationResult {
    pub id: String,
    pub description: String,
    pub severity: Severity,
    pub flagged: Vec<ArtifactHandle>,
}

impl EvaluationResult {
    pub fn has_flagged_artifacts(&self) -> bool {
        !self.flagged.is_empty()
    }
}

/// The complete set of rule-evaluation results from one rule-engine
/// invocation. Supplied whole; never mutated by the core.
#[derive(Clone, Debug, Default)]
pub struct PolicyEvaluation {
    pub results: Vec<EvaluationResult>,
}
