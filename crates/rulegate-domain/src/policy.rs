use rulegate_types::Severity;

/// Effective, already-validated configuration for one evaluation pass.
///
/// Resolution from user-facing config text lives in `rulegate-settings`;
/// by the time a pass runs, the threshold is a plain severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Minimum severity at and above which results fail the run.
    pub fail_on: Severity,
}

impl Default for EffectiveConfig {
    /// Only hard failures abort the run unless configured otherwise.
    fn default() -> Self {
        Self {
            fail_on: Severity::Fail,
        }
    }
}
