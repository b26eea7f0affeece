use crate::model::RenderableViolation;

/// One structured reporter line per (result, artifact) pair.
pub fn render_violation(violation: &RenderableViolation) -> String {
    format!(
        "{} ({}): {} : {}",
        violation.rule_id, violation.severity, violation.artifact_label, violation.description
    )
}
