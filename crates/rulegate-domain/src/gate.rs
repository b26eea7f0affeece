use crate::buckets::SeverityBuckets;
use rulegate_types::{EvaluationResult, Severity, Verdict};

/// The failing set: the union of all buckets at or above `threshold`.
///
/// Inclusive-upward escalation: `threshold = Info` fails on info, warn and
/// fail results; `Warn` on warn and fail; `Fail` only on fail. The union is
/// canonicalized by sorting ascending on result id, so input iteration order
/// never leaks into the output.
pub fn failing_set(buckets: &SeverityBuckets, threshold: Severity) -> Vec<EvaluationResult> {
    let mut failing: Vec<EvaluationResult> = [Severity::Info, Severity::Warn, Severity::Fail]
        .into_iter()
        .filter(|severity| severity.at_least(threshold))
        .flat_map(|severity| buckets.bucket(severity).iter().cloned())
        .collect();
    failing.sort_by(|a, b| a.id.cmp(&b.id));
    failing
}

/// A non-empty failing set fails the run.
pub fn verdict_for(failing: &[EvaluationResult]) -> Verdict {
    if failing.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}
