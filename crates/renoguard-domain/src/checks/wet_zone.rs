use crate::checks::{Coverage, Evaluation};
use crate::model::{OperationData, SceneData};
use renoguard_types::ids::RULE_WET_ZONE_WATERPROOFING;
use renoguard_types::{OperationType, Rule, Violation};

/// Placing a wet zone above a neighbour's living space needs the floor below, which the scene
/// does not carry. Report the gap instead of a silent pass.
pub fn check(scene: &SceneData, rules: &[&Rule]) -> Evaluation {
    let wet_zones = scene.wet_zones().count();
    if wet_zones == 0 || rules.is_empty() {
        return Evaluation::none();
    }

    tracing::debug!(
        wet_zones,
        rules = rules.len(),
        "wet-zone placement against the floor below is not verified"
    );
    Evaluation {
        violations: Vec::new(),
        coverage: Coverage::Partial("wet-zone placement over the floor below is not verified"),
    }
}

pub fn check_operation(_scene: &SceneData, op: &OperationData, rules: &[&Rule]) -> Evaluation {
    let expanding = match op.op_type {
        OperationType::MoveWetZone => false,
        OperationType::ExpandWetZone => true,
        _ => return Evaluation::none(),
    };

    let mut out = Vec::new();
    for rule in rules {
        let builder = if rule.code == RULE_WET_ZONE_WATERPROOFING {
            if !expanding {
                continue;
            }
            Violation::from_rule(
                rule,
                &op.element_id,
                "Expanding a wet zone requires waterproofing.",
            )
            .suggestion(
                "Include waterproofing of the floor and of the walls up to 20 cm height in the project.",
            )
        } else {
            Violation::from_rule(
                rule,
                &op.element_id,
                "Relocating a wet zone may place plumbing above a neighbour's living space.",
            )
            .suggestion("Confirm the layout of the floor below with the technical inventory bureau.")
        };

        let builder = match op.element_type {
            Some(element_type) => builder.element_type(element_type),
            None => builder,
        };
        out.push(builder.build());
    }

    Evaluation::full(out)
}
