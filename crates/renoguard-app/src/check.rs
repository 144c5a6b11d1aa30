//! The `check` use case: build the engine from config and catalog, then evaluate a scene.

use anyhow::Context;
use renoguard_catalog::RuleCatalog;
use renoguard_domain::RuleEngine;
use renoguard_domain::model::SceneData;
use renoguard_domain::policy::EngineConfig;
use renoguard_settings::{Overrides, RenoguardConfigV1};
use renoguard_types::ComplianceResult;
use time::OffsetDateTime;

/// Everything needed to build an engine.
#[derive(Clone, Debug)]
pub struct EngineInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub catalog: RuleCatalog,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Resolve config and bind it to the catalog's rules.
///
/// The catalog's version is stamped on results unless config pins one.
pub fn load_engine(input: EngineInput<'_>) -> anyhow::Result<RuleEngine> {
    // Empty config is allowed, defaults apply.
    let cfg = if input.config_text.trim().is_empty() {
        RenoguardConfigV1::default()
    } else {
        renoguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        renoguard_settings::resolve_config(cfg, input.overrides).context("resolve config")?;
    let mut config = resolved.effective;
    if !resolved.rules_version_pinned {
        config.rules_version = input.catalog.version().to_string();
    }

    tracing::debug!(
        profile = %config.profile,
        rules_version = %config.rules_version,
        rules = input.catalog.len(),
        active = input.catalog.count_active(),
        "engine configured"
    );
    Ok(RuleEngine::with_config(input.catalog.into_rules(), config))
}

pub fn run_scene_check(engine: &RuleEngine, scene: &SceneData) -> ComplianceResult {
    let started_at = OffsetDateTime::now_utc();
    let result = engine.check_scene(scene);
    tracing::info!(
        scene_id = %scene.id,
        compliant = result.compliant,
        violations = result.violations.len(),
        score = result.stats.compliance_score,
        gaps = result.coverage_gaps.len(),
        duration_ms = elapsed_ms(started_at),
        "scene check finished"
    );
    result
}

pub(crate) fn elapsed_ms(started_at: OffsetDateTime) -> u64 {
    (OffsetDateTime::now_utc() - started_at)
        .whole_milliseconds()
        .max(0) as u64
}

/// Map an outcome to the process exit code: 0 pass, 2 policy failure.
///
/// Runtime errors (exit 1) are mapped by the caller.
pub fn exit_code(compliant: bool, fully_covered: bool, config: &EngineConfig) -> i32 {
    if config.enforce && !compliant {
        return 2;
    }
    if config.require_full_coverage && !fully_covered {
        return 2;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use renoguard_catalog::parse_catalog_toml;
    use renoguard_types::RuleCategory;

    const CATALOG: &str = r#"
version = "2024.3"

[[rules]]
code = "SNiP-31-01-2003-5.7"
category = "min_area"
name = "Minimum room area"
severity = "WARNING"

[[rules]]
code = "ACC-1"
category = "accessibility"
name = "Accessible doors"
severity = "ERROR"
"#;

    fn scene() -> SceneData {
        crate::parse_scene_json(
            r#"{"id": "s1", "rooms": [{"id": "r1", "type": "BEDROOM", "area": 6.0, "has_windows": true}]}"#,
        )
        .expect("scene")
    }

    fn engine(config_text: &str) -> RuleEngine {
        load_engine(EngineInput {
            config_text,
            catalog: parse_catalog_toml(CATALOG).expect("catalog"),
            overrides: Overrides::default(),
        })
        .expect("engine")
    }

    #[test]
    fn empty_config_uses_catalog_version() {
        let engine = engine("");
        assert_eq!(engine.config().rules_version, "2024.3");
        assert_eq!(engine.config().profile, "strict");
    }

    #[test]
    fn pinned_version_wins_over_catalog() {
        let engine = engine("rules_version = \"7.0\"");
        assert_eq!(engine.config().rules_version, "7.0");
    }

    #[test]
    fn scene_check_reports_warning_and_gap() {
        let engine = engine("");
        let result = run_scene_check(&engine, &scene());
        assert!(result.compliant);
        assert_eq!(result.stats.compliance_score, 90);
        assert_eq!(result.stats.total_rules_checked, 2);
        assert_eq!(result.coverage_gaps.len(), 1);
        assert_eq!(result.coverage_gaps[0].category, RuleCategory::Accessibility);

        assert_eq!(exit_code(result.compliant, result.is_fully_covered(), engine.config()), 0);
    }

    #[test]
    fn required_coverage_turns_gaps_into_failure() {
        let engine = engine("require_full_coverage = true");
        let result = run_scene_check(&engine, &scene());
        assert_eq!(exit_code(result.compliant, result.is_fully_covered(), engine.config()), 2);
    }

    #[test]
    fn disabled_category_is_not_counted() {
        let engine = engine("[categories.accessibility]\nenabled = false\n");
        let result = run_scene_check(&engine, &scene());
        assert_eq!(result.stats.total_rules_checked, 1);
        assert!(result.is_fully_covered());
    }

    #[test]
    fn exit_codes() {
        let strict = EngineConfig::default();
        assert_eq!(exit_code(true, true, &strict), 0);
        assert_eq!(exit_code(false, true, &strict), 2);
        assert_eq!(exit_code(true, false, &strict), 0);

        let advisory = EngineConfig {
            enforce: false,
            ..EngineConfig::default()
        };
        assert_eq!(exit_code(false, true, &advisory), 0);
    }

    #[test]
    fn bad_config_is_an_error() {
        let err = load_engine(EngineInput {
            config_text: "profile = \"nope\"",
            catalog: RuleCatalog::default(),
            overrides: Overrides::default(),
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("unknown profile"));
    }
}
