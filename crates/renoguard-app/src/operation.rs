//! The `check-op` use case: verdict for one proposed edit.

use crate::check::elapsed_ms;
use renoguard_domain::RuleEngine;
use renoguard_domain::model::{OperationData, SceneData};
use renoguard_types::{
    ApprovalType, ComplianceResult, ComplianceStats, CoverageGap, Severity, Violation,
};
use serde::Serialize;
use time::OffsetDateTime;

/// Whether an operation may proceed and what sign-off it needs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OperationVerdict {
    pub allowed: bool,
    /// ERROR-severity violations.
    pub violations: Vec<Violation>,
    /// Everything below ERROR.
    pub warnings: Vec<Violation>,
    pub requires_approval: bool,
    pub approval_type: ApprovalType,
    pub stats: ComplianceStats,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coverage_gaps: Vec<CoverageGap>,
}

impl OperationVerdict {
    pub fn from_result(result: ComplianceResult) -> Self {
        let approval_type = derive_approval(&result.violations);
        let (violations, warnings): (Vec<Violation>, Vec<Violation>) = result
            .violations
            .into_iter()
            .partition(|v| v.severity == Severity::Error);
        Self {
            allowed: result.compliant,
            violations,
            warnings,
            requires_approval: approval_type != ApprovalType::None,
            approval_type,
            stats: result.stats,
            coverage_gaps: result.coverage_gaps,
        }
    }

    pub fn is_fully_covered(&self) -> bool {
        self.coverage_gaps.is_empty()
    }
}

/// Highest-precedence approval tier across all violations.
pub fn derive_approval(violations: &[Violation]) -> ApprovalType {
    violations
        .iter()
        .map(|v| v.approval_required)
        .max()
        .unwrap_or_default()
}

pub fn run_operation_check(
    engine: &RuleEngine,
    scene: &SceneData,
    op: &OperationData,
) -> OperationVerdict {
    let started_at = OffsetDateTime::now_utc();
    let verdict = OperationVerdict::from_result(engine.check_operation(scene, op));
    tracing::info!(
        scene_id = %scene.id,
        op = %op.op_type,
        element_id = %op.element_id,
        allowed = verdict.allowed,
        approval = %verdict.approval_type,
        errors = verdict.violations.len(),
        warnings = verdict.warnings.len(),
        duration_ms = elapsed_ms(started_at),
        "operation check finished"
    );
    verdict
}
