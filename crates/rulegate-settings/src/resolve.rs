use crate::model::RulegateConfigV1;
use anyhow::Context;
use rulegate_domain::policy::EffectiveConfig;
use rulegate_types::Severity;

/// Caller-supplied overrides, taking precedence over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub fail_on: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: RulegateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut effective = EffectiveConfig::default();

    if let Some(value) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_severity(value).context("invalid fail_on threshold")?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warn" => Ok(Severity::Warn),
        "fail" => Ok(Severity::Fail),
        other => anyhow::bail!("unknown severity: {other} (expected info|warn|fail)"),
    }
}
