use rulegate_types::Severity;

/// One (result, artifact) pair ready for rendering: the artifact identity is
/// already collapsed to its canonical label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableViolation {
    pub rule_id: String,
    pub severity: Severity,
    pub artifact_label: String,
    pub description: String,
}
