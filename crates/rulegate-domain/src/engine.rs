use crate::buckets::partition;
use crate::gate::{failing_set, verdict_for};
use crate::label::canonical_label;
use crate::policy::EffectiveConfig;
use rulegate_types::{EvaluationResult, PolicyEvaluation, Severity, Verdict};

/// One (result, artifact) pair with the artifact label already resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViolationRow {
    pub rule_id: String,
    pub severity: Severity,
    pub artifact_label: String,
    pub description: String,
}

/// Outcome of the pure evaluation pipeline: verdict plus the failing set,
/// sorted ascending by result id.
#[derive(Clone, Debug)]
pub struct DomainOutcome {
    pub verdict: Verdict,
    pub failing: Vec<EvaluationResult>,
}

/// Aggregate and gate one evaluation pass.
pub fn evaluate(evaluation: &PolicyEvaluation, cfg: &EffectiveConfig) -> DomainOutcome {
    let buckets = partition(evaluation);
    let failing = failing_set(&buckets, cfg.fail_on);
    DomainOutcome {
        verdict: verdict_for(&failing),
        failing,
    }
}

/// Reporter rows for every result with at least one flagged artifact,
/// regardless of outcome.
///
/// Deterministic ordering: results ascend by id; within a result, artifacts
/// keep the order the result supplied (treated as canonical).
pub fn violation_rows(evaluation: &PolicyEvaluation) -> Vec<ViolationRow> {
    rows_for(evaluation.results.iter())
}

/// Rows for the failing set only, used to build the failure digest.
pub fn failing_rows(failing: &[EvaluationResult]) -> Vec<ViolationRow> {
    rows_for(failing.iter())
}

fn rows_for<'a, I>(results: I) -> Vec<ViolationRow>
where
    I: Iterator<Item = &'a EvaluationResult>,
{
    let mut with_artifacts: Vec<&EvaluationResult> =
        results.filter(|r| r.has_flagged_artifacts()).collect();
    with_artifacts.sort_by(|a, b| a.id.cmp(&b.id));

    let mut rows = Vec::new();
    for result in with_artifacts {
        for artifact in &result.flagged {
            rows.push(ViolationRow {
                rule_id: result.id.clone(),
                severity: result.severity,
                artifact_label: canonical_label(artifact),
                description: result.description.clone(),
            });
        }
    }
    rows
}
