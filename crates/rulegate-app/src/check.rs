//! The evaluation pass use case: run the rule engine, report every
//! violation, gate on the configured threshold, digest the failing set.

use anyhow::Context;
use rulegate_domain::policy::EffectiveConfig;
use rulegate_domain::{ViolationRow, failing_rows, violation_rows};
use rulegate_render::{RenderableViolation, render_digest, render_violation};
use rulegate_settings::Overrides;
use rulegate_types::{ArtifactHandle, EvaluationResult, MessageKind, PolicyEvaluation, Verdict};
use tracing::{info, warn};

/// External rule engine: produces a policy evaluation from artifacts.
pub trait RuleEngine {
    /// Human-readable description of the rule set, used in logs and the
    /// digest prefix.
    fn ruleset_description(&self) -> String;

    /// Evaluate the rule set against the artifacts. Errors propagate
    /// unchanged to the caller; there is no partial result.
    fn evaluate(&self, artifacts: &[ArtifactHandle]) -> anyhow::Result<PolicyEvaluation>;
}

/// Injected reporting sink accepting `(kind, text)` pairs. Delivery
/// guarantees (synchronous write, buffering) are the sink's concern.
pub trait ReportSink {
    fn report(&mut self, kind: MessageKind, text: &str) -> anyhow::Result<()>;
}

/// Input for the evaluation pass.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found, defaults apply).
    pub config_text: &'a str,
    /// Caller overrides, taking precedence over the config file.
    pub overrides: Overrides,
    /// Artifacts to check.
    pub artifacts: &'a [ArtifactHandle],
}

/// Outcome of one evaluation pass, exposed for post-call introspection.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub verdict: Verdict,
    /// Failing results sorted ascending by id; empty on a passed run.
    pub failing: Vec<EvaluationResult>,
    /// The bounded failure digest; present exactly on a failed run.
    pub digest: Option<String>,
}

/// Output from the evaluation pass.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub outcome: Outcome,
    /// The effective configuration the pass ran with.
    pub effective: EffectiveConfig,
}

/// Run one evaluation pass.
///
/// Configuration errors and rule-engine errors abort the pass before any
/// message reaches the sink. Once reporting starts, the full ordered
/// sequence is attempted even if individual deliveries fail.
pub fn run_check(
    engine: &dyn RuleEngine,
    sink: &mut dyn ReportSink,
    input: CheckInput<'_>,
) -> anyhow::Result<CheckOutput> {
    let cfg = if input.config_text.trim().is_empty() {
        rulegate_settings::RulegateConfigV1::default()
    } else {
        rulegate_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = rulegate_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    let effective = resolved.effective;

    let ruleset = engine.ruleset_description();
    info!(ruleset = %ruleset, "evaluate compliance rule set");
    let evaluation = engine
        .evaluate(input.artifacts)
        .context("rule engine evaluation")?;
    info!("rule evaluation done");

    let outcome = rulegate_domain::evaluate(&evaluation, &effective);

    // Every (result, artifact) pair is reported, pass or fail.
    for row in violation_rows(&evaluation) {
        let text = render_violation(&to_renderable(&row));
        deliver(sink, MessageKind::RuleEngine, &text);
    }

    let digest = if outcome.verdict.is_fail() {
        let rows: Vec<RenderableViolation> = failing_rows(&outcome.failing)
            .iter()
            .map(to_renderable)
            .collect();
        let digest = render_digest(&ruleset, &rows);
        deliver(sink, MessageKind::ProcessingFailure, &digest);
        info!(ruleset = %ruleset, "rule set failed evaluation");
        Some(digest)
    } else {
        None
    };

    Ok(CheckOutput {
        outcome: Outcome {
            verdict: outcome.verdict,
            failing: outcome.failing,
            digest,
        },
        effective,
    })
}

fn to_renderable(row: &ViolationRow) -> RenderableViolation {
    RenderableViolation {
        rule_id: row.rule_id.clone(),
        severity: row.severity,
        artifact_label: row.artifact_label.clone(),
        description: row.description.clone(),
    }
}

/// Forward one message; a failed delivery never suppresses later messages.
fn deliver(sink: &mut dyn ReportSink, kind: MessageKind, text: &str) {
    if let Err(error) = sink.report(kind, text) {
        warn!(kind = ?kind, error = %error, "report sink rejected message");
    }
}
