use crate::checks::Evaluation;
use crate::model::{OperationData, SceneData};
use renoguard_types::ids::{DEFAULT_MAX_OPENING_WIDTH, PARAM_MAX_OPENING_WIDTH};
use renoguard_types::{ElementType, OperationType, Rule, Severity, Violation};

pub fn check_operation(scene: &SceneData, op: &OperationData, rules: &[&Rule]) -> Evaluation {
    let Some(wall) = scene.wall(&op.element_id) else {
        return Evaluation::none();
    };
    if !wall.is_load_bearing {
        return Evaluation::none();
    }

    let mut out = Vec::new();
    for rule in rules {
        match op.op_type {
            OperationType::DemolishWall => out.push(
                Violation::from_rule(
                    rule,
                    &op.element_id,
                    "Demolition of a load-bearing wall is prohibited: load-bearing walls keep the building stable.",
                )
                .severity(Severity::Error)
                .element_type(ElementType::LoadBearingWall)
                .suggestion(
                    "Create an opening with a certified structural proof instead of full demolition.",
                )
                .build(),
            ),
            OperationType::AddOpening => {
                let max_width = rule.float_param(PARAM_MAX_OPENING_WIDTH, DEFAULT_MAX_OPENING_WIDTH);
                out.push(
                    Violation::from_rule(
                        rule,
                        &op.element_id,
                        format!(
                            "An opening in a load-bearing wall requires a reinforcement project. Maximum width: {max_width:.1} m."
                        ),
                    )
                    .element_type(ElementType::LoadBearingWall)
                    .suggestion(
                        "Commission a reinforcement project from a certified structural engineer.",
                    )
                    .build(),
                );
            }
            _ => {}
        }
    }

    Evaluation::full(out)
}
