use crate::ids::DEFAULT_RULES_VERSION;
use crate::taxonomy::{RuleCategory, Severity};
use crate::violation::Violation;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Score deductions per violation, by severity.
pub const ERROR_PENALTY: i64 = 25;
pub const WARNING_PENALTY: i64 = 10;
pub const INFO_PENALTY: i64 = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComplianceStats {
    pub total_rules_checked: u32,
    pub errors_count: u32,
    pub warnings_count: u32,
    pub info_count: u32,
    /// 0..=100, severity weighted.
    pub compliance_score: u32,
}

/// Why a category's rules were not (fully) evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GapKind {
    /// No checker is registered for the category.
    Unregistered,
    /// A checker exists but evaluates nothing yet.
    NotImplemented,
    /// A checker evaluates only part of what its rules demand.
    Partial,
}

/// A category whose in-scope rules were skipped in whole or in part.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CoverageGap {
    pub category: RuleCategory,
    pub kind: GapKind,
    pub rules_affected: u32,
    pub note: String,
}

/// Aggregate outcome of one scene or operation check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComplianceResult {
    /// False iff at least one violation is blocking.
    pub compliant: bool,
    pub violations: Vec<Violation>,
    pub stats: ComplianceStats,
    pub rules_version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coverage_gaps: Vec<CoverageGap>,
}

impl Default for ComplianceResult {
    fn default() -> Self {
        Self::new(DEFAULT_RULES_VERSION)
    }
}

impl ComplianceResult {
    pub fn new(rules_version: &str) -> Self {
        Self {
            compliant: true,
            violations: Vec::new(),
            stats: ComplianceStats::default(),
            rules_version: rules_version.to_string(),
            coverage_gaps: Vec::new(),
        }
    }

    pub fn add_violation(&mut self, v: Violation) {
        if v.is_blocking() {
            self.compliant = false;
        }
        match v.severity {
            Severity::Error => self.stats.errors_count += 1,
            Severity::Warning => self.stats.warnings_count += 1,
            Severity::Info => self.stats.info_count += 1,
        }
        self.violations.push(v);
    }

    pub fn add_gap(&mut self, gap: CoverageGap) {
        self.coverage_gaps.push(gap);
    }

    /// Record how many rules were in scope and compute the score.
    pub fn finalize(&mut self, total_rules_checked: usize) {
        self.stats.total_rules_checked = u32::try_from(total_rules_checked).unwrap_or(u32::MAX);
        self.stats.compliance_score = compliance_score(
            self.stats.errors_count,
            self.stats.warnings_count,
            self.stats.info_count,
        );
    }

    pub fn has_errors(&self) -> bool {
        self.stats.errors_count > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.stats.warnings_count > 0
    }

    pub fn is_fully_covered(&self) -> bool {
        self.coverage_gaps.is_empty()
    }

    pub fn blocking(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_blocking())
    }

    pub fn filter_by_severity(&self, severity: Severity) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .collect()
    }

    pub fn filter_by_category(&self, category: RuleCategory) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.category == category)
            .collect()
    }
}

/// `max(0, 100 - 25*errors - 10*warnings - 2*info)`.
pub fn compliance_score(errors: u32, warnings: u32, info: u32) -> u32 {
    let deducted = ERROR_PENALTY * i64::from(errors)
        + WARNING_PENALTY * i64::from(warnings)
        + INFO_PENALTY * i64::from(info);
    (100 - deducted).clamp(0, 100) as u32
}
