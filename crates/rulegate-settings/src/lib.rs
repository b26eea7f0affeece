//! Config parsing and failure-threshold resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::RulegateConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `rulegate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<RulegateConfigV1> {
    let cfg: RulegateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the evaluation core.
pub fn resolve_config(
    cfg: RulegateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
