use crate::model::RenderableViolation;
use std::collections::BTreeMap;

/// Distinct artifacts named in the digest before truncation.
pub const MAX_ARTIFACTS_IN_DIGEST: usize = 3;
/// Failing-result descriptions listed per artifact before truncation.
pub const MAX_RESULTS_PER_ARTIFACT: usize = 3;

/// Bounded digest of the failing set, grouped by artifact label.
///
/// Labels ascend lexicographically, as do the descriptions within each
/// block. Counts beyond the caps collapse into trailing markers so the
/// operator-facing message stays short no matter how many artifacts a run
/// flagged. Within one label, results dedup by rule id.
pub fn render_digest(ruleset: &str, failing: &[RenderableViolation]) -> String {
    // label -> rule id -> description, one entry per distinct failing result
    let mut by_artifact: BTreeMap<&str, BTreeMap<&str, &str>> = BTreeMap::new();
    for row in failing {
        by_artifact
            .entry(row.artifact_label.as_str())
            .or_default()
            .insert(row.rule_id.as_str(), row.description.as_str());
    }

    let mut out = format!("Rule engine=[{ruleset}] failed evaluation. Due to:");

    for (label, results) in by_artifact.iter().take(MAX_ARTIFACTS_IN_DIGEST) {
        out.push_str(&format!("\n\t- the artifact=[{label}] failed, due to:"));

        let mut descriptions: Vec<&str> = results.values().copied().collect();
        descriptions.sort_unstable();
        for description in descriptions.iter().take(MAX_RESULTS_PER_ARTIFACT) {
            out.push_str(&format!("\n\t\t- {description}"));
        }
        if descriptions.len() > MAX_RESULTS_PER_ARTIFACT {
            out.push_str(&format!(
                "\n\t\t- ... and {} fail causing results more",
                descriptions.len() - MAX_RESULTS_PER_ARTIFACT
            ));
        }
    }

    if by_artifact.len() > MAX_ARTIFACTS_IN_DIGEST {
        out.push_str(&format!(
            "\n\t - ... and {} artifacts more",
            by_artifact.len() - MAX_ARTIFACTS_IN_DIGEST
        ));
    }

    out.push_str("\nSee generated report for details.");
    out
}
