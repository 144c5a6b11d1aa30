use crate::{model::RenoguardConfigV1, presets};
use anyhow::Context;
use renoguard_domain::policy::EngineConfig;
use renoguard_types::RuleCategory;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub rules_version: Option<String>,
    pub parallel: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EngineConfig,
    /// Whether `rules_version` came from config or overrides rather than the preset default.
    pub rules_version_pinned: bool,
}

pub fn resolve_config(
    cfg: RenoguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile).with_context(|| {
        format!("unknown profile: {profile} (expected 'strict' or 'advisory')")
    })?;

    let rules_version = overrides.rules_version.clone().or(cfg.rules_version.clone());
    let rules_version_pinned = rules_version.is_some();
    if let Some(v) = rules_version {
        anyhow::ensure!(!v.trim().is_empty(), "rules_version must not be empty");
        effective.rules_version = v;
    }

    if let Some(parallel) = overrides.parallel.or(cfg.parallel) {
        effective.parallel = parallel;
    }
    if let Some(require) = cfg.require_full_coverage {
        effective.require_full_coverage = require;
    }

    // per-category overrides
    for (name, cc) in cfg.categories.iter() {
        let category: RuleCategory = name
            .parse()
            .with_context(|| format!("invalid category in [categories.{name}]"))?;
        match cc.enabled {
            Some(false) => {
                effective.disabled_categories.insert(category);
            }
            Some(true) => {
                effective.disabled_categories.remove(&category);
            }
            None => {}
        }
    }

    Ok(ResolvedConfig {
        effective,
        rules_version_pinned,
    })
}
