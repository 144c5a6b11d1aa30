use crate::checks::{CategoryChecker, Coverage, Evaluation};
use crate::model::{OperationData, SceneData};
use crate::policy::EngineConfig;
use rayon::prelude::*;
use renoguard_types::{
    ComplianceResult, CoverageGap, GapKind, OperationType, Rule, RuleCategory, Violation,
};
use std::collections::BTreeMap;

/// Evaluates a fixed rule set against scenes and proposed operations.
///
/// Holds no mutable state: concurrent calls on one engine are independent.
#[derive(Clone, Debug)]
pub struct RuleEngine {
    rules: Vec<Rule>,
    config: EngineConfig,
}

type Groups<'a> = Vec<(RuleCategory, Vec<&'a Rule>)>;

impl RuleEngine {
    /// Build an engine over the full catalog (active and inactive rules).
    pub fn new(rules: Vec<Rule>) -> Self {
        Self::with_config(rules, EngineConfig::default())
    }

    pub fn with_config(rules: Vec<Rule>, config: EngineConfig) -> Self {
        Self { rules, config }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Full structural check of a scene against every active rule.
    pub fn check_scene(&self, scene: &SceneData) -> ComplianceResult {
        let in_scope: Vec<&Rule> = self.active_rules().collect();
        let span = tracing::debug_span!("check_scene", scene_id = %scene.id, rules = in_scope.len());
        let _guard = span.enter();

        let groups = group_by_category(&in_scope);
        let result = self.evaluate(groups, in_scope.len(), |checker, rules| {
            checker.check(scene, rules)
        });
        tracing::debug!(
            violations = result.violations.len(),
            compliant = result.compliant,
            "scene evaluated"
        );
        result
    }

    /// Check of one proposed operation, against only the rules that name its type.
    pub fn check_operation(&self, scene: &SceneData, op: &OperationData) -> ComplianceResult {
        let in_scope: Vec<&Rule> = self.rules_for_operation(op.op_type).collect();
        let span = tracing::debug_span!(
            "check_operation",
            scene_id = %scene.id,
            op = %op.op_type,
            element_id = %op.element_id,
            rules = in_scope.len()
        );
        let _guard = span.enter();

        let groups = group_by_category(&in_scope);
        let result = self.evaluate(groups, in_scope.len(), |checker, rules| {
            checker.check_operation(scene, op, rules)
        });
        tracing::debug!(
            violations = result.violations.len(),
            compliant = result.compliant,
            "operation evaluated"
        );
        result
    }

    /// Active rules in enabled categories, in catalog order.
    pub fn active_rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules
            .iter()
            .filter(|r| r.active && self.config.is_enabled(r.category))
    }

    pub fn rules_for_operation(&self, op: OperationType) -> impl Iterator<Item = &Rule> {
        self.active_rules()
            .filter(move |r| r.applies_to_operation(op))
    }

    fn evaluate<F>(&self, groups: Groups<'_>, rules_checked: usize, run: F) -> ComplianceResult
    where
        F: Fn(CategoryChecker, &[&Rule]) -> Evaluation + Sync,
    {
        let dispatch = |(category, rules): &(RuleCategory, Vec<&Rule>)| {
            dispatch_category(*category, rules, &run)
        };
        let outcomes: Vec<(Vec<Violation>, Option<CoverageGap>)> = if self.config.parallel {
            groups.par_iter().map(dispatch).collect()
        } else {
            groups.iter().map(dispatch).collect()
        };

        let mut violations = Vec::new();
        let mut gaps = Vec::new();
        for (found, gap) in outcomes {
            violations.extend(found);
            gaps.extend(gap);
        }

        // Category order is already fixed; a stable sort keeps insertion order per code.
        violations.sort_by(|a, b| a.rule_code.cmp(&b.rule_code));

        let mut result = ComplianceResult::new(&self.config.rules_version);
        for v in violations {
            result.add_violation(v);
        }
        for gap in gaps {
            result.add_gap(gap);
        }
        result.finalize(rules_checked);
        result
    }
}

fn dispatch_category<F>(
    category: RuleCategory,
    rules: &[&Rule],
    run: &F,
) -> (Vec<Violation>, Option<CoverageGap>)
where
    F: Fn(CategoryChecker, &[&Rule]) -> Evaluation,
{
    let affected = u32::try_from(rules.len()).unwrap_or(u32::MAX);
    let Some(checker) = CategoryChecker::for_category(category) else {
        tracing::debug!(%category, rules = affected, "no checker registered; rules skipped");
        return (
            Vec::new(),
            Some(CoverageGap {
                category,
                kind: GapKind::Unregistered,
                rules_affected: affected,
                note: format!("no checker is registered for category '{category}'"),
            }),
        );
    };

    let evaluation = run(checker, rules);
    tracing::debug!(
        %category,
        rules = affected,
        violations = evaluation.violations.len(),
        "category evaluated"
    );

    let gap = match evaluation.coverage {
        Coverage::Full => None,
        Coverage::Partial(note) => Some(CoverageGap {
            category,
            kind: GapKind::Partial,
            rules_affected: affected,
            note: note.to_string(),
        }),
        Coverage::NotImplemented(note) => Some(CoverageGap {
            category,
            kind: GapKind::NotImplemented,
            rules_affected: affected,
            note: note.to_string(),
        }),
    };
    (evaluation.violations, gap)
}

/// Group rules by category in canonical category order; each group sorted by rule code.
fn group_by_category<'a>(rules: &[&'a Rule]) -> Groups<'a> {
    let mut grouped: BTreeMap<RuleCategory, Vec<&'a Rule>> = BTreeMap::new();
    for rule in rules {
        grouped.entry(rule.category).or_default().push(rule);
    }
    grouped
        .into_iter()
        .map(|(category, mut rules)| {
            rules.sort_by(|a, b| a.code.cmp(&b.code));
            (category, rules)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        bedroom, load_bearing_wall, partition_wall, rule, scene, windowless,
    };
    use renoguard_types::{ApprovalType, Severity};

    #[test]
    fn groups_only_active_rules() {
        let engine = RuleEngine::new(vec![
            rule("LB-1", RuleCategory::LoadBearing, Severity::Error),
            rule("LB-2", RuleCategory::LoadBearing, Severity::Error),
            rule("WZ-1", RuleCategory::WetZones, Severity::Error),
            rule("MA-1", RuleCategory::MinArea, Severity::Warning),
            rule("MA-2", RuleCategory::MinArea, Severity::Warning).inactive(),
        ]);

        let active: Vec<&Rule> = engine.active_rules().collect();
        let groups = group_by_category(&active);
        let counts: Vec<(RuleCategory, usize)> =
            groups.iter().map(|(c, r)| (*c, r.len())).collect();
        assert_eq!(
            counts,
            vec![
                (RuleCategory::LoadBearing, 2),
                (RuleCategory::WetZones, 1),
                (RuleCategory::MinArea, 1),
            ]
        );
    }

    #[test]
    fn every_category_but_accessibility_has_a_checker() {
        for category in RuleCategory::ALL {
            let registered = CategoryChecker::for_category(category);
            assert_eq!(
                registered.is_some(),
                category != RuleCategory::Accessibility,
                "{category}"
            );
            if let Some(checker) = registered {
                assert_eq!(checker.category(), category);
            }
        }
        assert_eq!(CategoryChecker::REGISTERED.len(), 7);
    }

    #[test]
    fn unregistered_category_is_reported_not_silent() {
        let engine = RuleEngine::new(vec![
            rule("ACC-1", RuleCategory::Accessibility, Severity::Error),
            rule("ACC-2", RuleCategory::Accessibility, Severity::Warning),
            rule("MA-1", RuleCategory::MinArea, Severity::Warning),
        ]);

        let result = engine.check_scene(&scene(vec![bedroom("r1", 10.0)], Vec::new()));
        assert!(result.violations.is_empty());
        assert_eq!(result.stats.total_rules_checked, 3);
        assert_eq!(result.coverage_gaps.len(), 1);
        let gap = &result.coverage_gaps[0];
        assert_eq!(gap.category, RuleCategory::Accessibility);
        assert_eq!(gap.kind, GapKind::Unregistered);
        assert_eq!(gap.rules_affected, 2);
    }

    #[test]
    fn operation_check_counts_only_matching_rules() {
        let engine = RuleEngine::new(vec![
            rule("LB-1", RuleCategory::LoadBearing, Severity::Error)
                .with_operations(&[OperationType::DemolishWall]),
            rule("MA-1", RuleCategory::MinArea, Severity::Warning)
                .with_operations(&[OperationType::MergeRooms]),
            rule("GEN-1", RuleCategory::General, Severity::Info),
        ]);
        let scene = scene(Vec::new(), vec![partition_wall("w1")]);
        let op = OperationData::new(OperationType::DemolishWall, "w1");

        let result = engine.check_operation(&scene, &op);
        assert_eq!(result.stats.total_rules_checked, 1);
        assert!(result.compliant);
        assert_eq!(result.stats.compliance_score, 100);
    }

    #[test]
    fn disabled_categories_are_excluded_from_counts() {
        let mut config = EngineConfig::default();
        config.disabled_categories.insert(RuleCategory::MinArea);
        config.disabled_categories.insert(RuleCategory::FireSafety);
        let engine = RuleEngine::with_config(
            vec![
                rule("MA-1", RuleCategory::MinArea, Severity::Warning),
                rule("DL-1", RuleCategory::Daylight, Severity::Warning),
                rule("FS-1", RuleCategory::FireSafety, Severity::Error),
            ],
            config,
        );

        let result = engine.check_scene(&scene(vec![bedroom("r1", 2.0)], Vec::new()));
        assert_eq!(result.stats.total_rules_checked, 1);
        assert!(result.filter_by_category(RuleCategory::MinArea).is_empty());
        // Out of scope, so the unevaluated fire-safety rule is not a gap.
        assert!(result.is_fully_covered());
    }

    #[test]
    fn sequential_and_parallel_paths_agree() {
        let rules = vec![
            rule("Z-DL", RuleCategory::Daylight, Severity::Warning),
            rule("A-MA", RuleCategory::MinArea, Severity::Warning),
            rule("M-FS", RuleCategory::FireSafety, Severity::Error),
        ];
        let scene = scene(
            vec![windowless(bedroom("r1", 4.0)), windowless(bedroom("r2", 5.0))],
            vec![load_bearing_wall("w1")],
        );

        let parallel = RuleEngine::new(rules.clone()).check_scene(&scene);
        let sequential = RuleEngine::with_config(
            rules,
            EngineConfig {
                parallel: false,
                ..EngineConfig::default()
            },
        )
        .check_scene(&scene);

        assert_eq!(parallel, sequential);
        let codes: Vec<&str> = parallel
            .violations
            .iter()
            .map(|v| v.rule_code.as_str())
            .collect();
        assert_eq!(codes, vec!["A-MA", "A-MA", "Z-DL", "Z-DL"]);
    }

    #[test]
    fn rules_version_comes_from_config() {
        let engine = RuleEngine::with_config(
            Vec::new(),
            EngineConfig {
                rules_version: "2024.1".to_string(),
                ..EngineConfig::default()
            },
        );
        let result = engine.check_scene(&SceneData::default());
        assert_eq!(result.rules_version, "2024.1");
        assert_eq!(result.stats.total_rules_checked, 0);
    }

    #[test]
    fn prohibited_general_rule_blocks_operation() {
        let engine = RuleEngine::new(vec![
            rule("GEN-9", RuleCategory::General, Severity::Info)
                .with_operations(&[OperationType::MergeRooms])
                .with_approval(ApprovalType::Prohibited),
        ]);
        let op = OperationData::new(OperationType::MergeRooms, "r1");
        let result = engine.check_operation(&SceneData::default(), &op);
        assert!(!result.compliant);
        assert_eq!(result.stats.info_count, 1);
        assert_eq!(result.stats.compliance_score, 98);
    }
}
