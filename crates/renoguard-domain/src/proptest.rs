//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - score arithmetic and stats partitioning
//! - ordering determinism and repeatability, for scenes and operations
//! - per-checker edge cases over arbitrary scenes

use crate::engine::RuleEngine;
use crate::model::{OperationData, RoomData, SceneData};
use crate::policy::EngineConfig;
use crate::test_support::{load_bearing_wall, partition_wall, room, rule, scene};
use proptest::prelude::*;
use renoguard_types::ids::{RULE_DAYLIGHT, RULE_LOAD_BEARING_WALLS, RULE_MIN_ROOM_AREA};
use renoguard_types::{
    OperationType, RoomType, Rule, RuleCategory, Severity, compliance_score,
};

// ============================================================================
// Strategies
// ============================================================================

fn arb_room_type() -> impl Strategy<Value = RoomType> {
    prop_oneof![
        Just(RoomType::Living),
        Just(RoomType::Bedroom),
        Just(RoomType::Kitchen),
        Just(RoomType::Bathroom),
        Just(RoomType::Toilet),
        Just(RoomType::Hallway),
        Just(RoomType::Balcony),
        Just(RoomType::Storage),
        Just(RoomType::Other),
    ]
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Error),
        Just(Severity::Warning),
        Just(Severity::Info),
    ]
}

fn arb_room(index: usize) -> impl Strategy<Value = RoomData> {
    (arb_room_type(), 0.0f64..30.0, any::<bool>()).prop_map(move |(room_type, area, windows)| {
        let mut r = room(&format!("room-{index}"), room_type, area);
        r.has_windows = windows;
        r
    })
}

fn arb_scene() -> impl Strategy<Value = SceneData> {
    (0usize..8)
        .prop_flat_map(|n| (0..n).map(arb_room).collect::<Vec<_>>())
        .prop_map(|rooms| scene(rooms, vec![load_bearing_wall("w1"), partition_wall("p1")]))
}

fn arb_rules() -> impl Strategy<Value = Vec<Rule>> {
    prop::collection::vec(
        (
            prop_oneof![
                Just((RuleCategory::MinArea, "MA")),
                Just((RuleCategory::Daylight, "DL")),
                Just((RuleCategory::WetZones, "WZ")),
                Just((RuleCategory::FireSafety, "FS")),
                Just((RuleCategory::Accessibility, "AC")),
            ],
            arb_severity(),
            0u8..10,
            any::<bool>(),
        ),
        0..6,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .map(|((category, prefix), severity, n, active)| {
                let r = rule(&format!("{prefix}-{n}"), category, severity);
                if active { r } else { r.inactive() }
            })
            .collect()
    })
}

fn arb_op_type() -> impl Strategy<Value = OperationType> {
    prop::sample::select(OperationType::ALL.to_vec())
}

fn arb_op_rules() -> impl Strategy<Value = Vec<Rule>> {
    prop::collection::vec(
        (
            prop_oneof![
                Just((RuleCategory::LoadBearing, "LB")),
                Just((RuleCategory::WetZones, "WZ")),
                Just((RuleCategory::Ventilation, "VE")),
                Just((RuleCategory::MinArea, "MA")),
                Just((RuleCategory::Daylight, "DL")),
                Just((RuleCategory::General, "GE")),
                Just((RuleCategory::Accessibility, "AC")),
            ],
            arb_severity(),
            0u8..10,
            prop::sample::subsequence(OperationType::ALL.to_vec(), 0..=4),
        ),
        0..8,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .map(|((category, prefix), severity, n, ops)| {
                rule(&format!("{prefix}-{n}"), category, severity).with_operations(&ops)
            })
            .collect()
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn score_is_clamped_penalty_sum(e in 0u32..10, w in 0u32..20, i in 0u32..60) {
        let raw = 100 - 25 * i64::from(e) - 10 * i64::from(w) - 2 * i64::from(i);
        let expected = raw.clamp(0, 100) as u32;
        prop_assert_eq!(compliance_score(e, w, i), expected);
    }

    #[test]
    fn stats_partition_violations(scene in arb_scene(), rules in arb_rules()) {
        let result = RuleEngine::new(rules).check_scene(&scene);
        let s = &result.stats;
        prop_assert_eq!(
            (s.errors_count + s.warnings_count + s.info_count) as usize,
            result.violations.len()
        );
        prop_assert_eq!(
            s.compliance_score,
            compliance_score(s.errors_count, s.warnings_count, s.info_count)
        );
        prop_assert_eq!(result.compliant, result.blocking().next().is_none());

        let buckets: Vec<Vec<&renoguard_types::Violation>> = Severity::ALL
            .into_iter()
            .map(|sev| result.filter_by_severity(sev))
            .collect();
        for v in &result.violations {
            let hits = buckets
                .iter()
                .flatten()
                .filter(|b| std::ptr::eq(**b, v))
                .count();
            prop_assert_eq!(hits, 1);
        }
    }

    #[test]
    fn total_counts_every_active_rule(scene in arb_scene(), rules in arb_rules()) {
        let active = rules.iter().filter(|r| r.active).count();
        let result = RuleEngine::new(rules).check_scene(&scene);
        prop_assert_eq!(result.stats.total_rules_checked as usize, active);
    }

    #[test]
    fn evaluation_is_repeatable_and_ordered(scene in arb_scene(), rules in arb_rules()) {
        let parallel = RuleEngine::new(rules.clone());
        let sequential = RuleEngine::with_config(
            rules,
            EngineConfig { parallel: false, ..EngineConfig::default() },
        );

        let first = parallel.check_scene(&scene);
        prop_assert_eq!(&first, &parallel.check_scene(&scene));
        prop_assert_eq!(&first, &sequential.check_scene(&scene));

        for pair in first.violations.windows(2) {
            prop_assert!(pair[0].rule_code <= pair[1].rule_code);
        }
    }

    #[test]
    fn operation_checks_are_repeatable_and_ordered(
        scene in arb_scene(),
        rules in arb_op_rules(),
        op_type in arb_op_type(),
        target in prop::sample::select(vec!["w1", "p1", "room-0", "missing"]),
    ) {
        let op = OperationData::new(op_type, target);
        let in_scope = rules.iter().filter(|r| r.applies_to_operation(op_type)).count();
        let parallel = RuleEngine::new(rules.clone());
        let sequential = RuleEngine::with_config(
            rules,
            EngineConfig { parallel: false, ..EngineConfig::default() },
        );

        let first = parallel.check_operation(&scene, &op);
        prop_assert_eq!(&first, &parallel.check_operation(&scene, &op));
        prop_assert_eq!(&first, &sequential.check_operation(&scene, &op));
        prop_assert_eq!(first.stats.total_rules_checked as usize, in_scope);

        for pair in first.violations.windows(2) {
            prop_assert!(pair[0].rule_code <= pair[1].rule_code);
        }
        for v in &first.violations {
            prop_assert!(v.rule_code.get(..2).is_some_and(|p| p != "AC"));
        }
    }

    #[test]
    fn min_area_yields_one_violation_per_undersized_room(scene in arb_scene()) {
        let engine = RuleEngine::new(vec![
            rule(RULE_MIN_ROOM_AREA, RuleCategory::MinArea, Severity::Warning),
            rule("MA-EXTRA", RuleCategory::MinArea, Severity::Error),
        ]);
        let result = engine.check_scene(&scene);

        let expected = scene
            .rooms
            .iter()
            .filter(|r| {
                let min = match r.room_type {
                    RoomType::Living => 14.0,
                    RoomType::Bedroom => 8.0,
                    RoomType::Kitchen => 5.0,
                    RoomType::Bathroom => 3.8,
                    RoomType::Toilet => 1.2,
                    _ => 0.0,
                };
                min > 0.0 && r.area < min
            })
            .count();
        prop_assert_eq!(result.violations.len(), expected);
        prop_assert!(result.violations.iter().all(|v| v.rule_code == "MA-EXTRA"));
    }

    #[test]
    fn daylight_flags_only_dark_habitable_rooms(scene in arb_scene()) {
        let engine = RuleEngine::new(vec![rule(RULE_DAYLIGHT, RuleCategory::Daylight, Severity::Warning)]);
        let result = engine.check_scene(&scene);
        let dark = scene
            .rooms
            .iter()
            .filter(|r| r.room_type.is_habitable() && !r.has_windows)
            .count();
        prop_assert_eq!(result.violations.len(), dark);
    }

    #[test]
    fn partition_walls_never_trigger_load_bearing(
        demolish in any::<bool>(),
        severity in arb_severity(),
    ) {
        let engine = RuleEngine::new(vec![
            rule(RULE_LOAD_BEARING_WALLS, RuleCategory::LoadBearing, severity)
                .with_operations(&[OperationType::DemolishWall, OperationType::AddOpening]),
        ]);
        let op_type = if demolish { OperationType::DemolishWall } else { OperationType::AddOpening };
        let scene = scene(Vec::new(), vec![partition_wall("p1"), load_bearing_wall("w1")]);

        let on_partition = engine.check_operation(&scene, &OperationData::new(op_type, "p1"));
        prop_assert!(on_partition.violations.is_empty());

        let on_bearing = engine.check_operation(&scene, &OperationData::new(op_type, "w1"));
        prop_assert_eq!(on_bearing.violations.len(), 1);
    }
}
