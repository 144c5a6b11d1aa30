//! The `validate` use case: a quick pass that keeps only critical violations.

use crate::check::run_scene_check;
use renoguard_domain::RuleEngine;
use renoguard_domain::model::SceneData;
use renoguard_types::{CoverageGap, Severity, Violation};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub critical_errors: Vec<Violation>,
    pub warnings_count: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coverage_gaps: Vec<CoverageGap>,
}

pub fn run_validation(engine: &RuleEngine, scene: &SceneData) -> ValidationResult {
    let result = run_scene_check(engine, scene);
    let critical_errors: Vec<Violation> = result
        .filter_by_severity(Severity::Error)
        .into_iter()
        .cloned()
        .collect();
    ValidationResult {
        valid: critical_errors.is_empty(),
        critical_errors,
        warnings_count: result.stats.warnings_count,
        coverage_gaps: result.coverage_gaps,
    }
}
