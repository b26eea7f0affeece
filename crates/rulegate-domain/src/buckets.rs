use rulegate_types::{EvaluationResult, PolicyEvaluation, Severity};

/// Per-severity partition of the results that flagged at least one artifact.
#[derive(Clone, Debug, Default)]
pub struct SeverityBuckets {
    pub info: Vec<EvaluationResult>,
    pub warn: Vec<EvaluationResult>,
    pub fail: Vec<EvaluationResult>,
}

impl SeverityBuckets {
    pub fn bucket(&self, severity: Severity) -> &[EvaluationResult] {
        match severity {
            Severity::Info => &self.info,
            Severity::Warn => &self.warn,
            Severity::Fail => &self.fail,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.info.is_empty() && self.warn.is_empty() && self.fail.is_empty()
    }
}

/// Partition an evaluation into per-severity buckets.
///
/// Results with an empty flagged-artifact set are inert and never enter a
/// bucket, whatever their severity. Pure: the same evaluation always yields
/// the same partition.
pub fn partition(evaluation: &PolicyEvaluation) -> SeverityBuckets {
    let mut buckets = SeverityBuckets::default();
    for result in &evaluation.results {
        if !result.has_flagged_artifacts() {
            continue;
        }
        match result.severity {
            Severity::Info => buckets.info.push(result.clone()),
            Severity::Warn => buckets.warn.push(result.clone()),
            Severity::Fail => buckets.fail.push(result.clone()),
        }
    }
    buckets
}
