//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CategoryConfig, RenoguardConfigV1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `renoguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<RenoguardConfigV1> {
    let cfg: RenoguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective engine settings (profile preset + config file + overrides).
pub fn resolve_config(
    cfg: RenoguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
