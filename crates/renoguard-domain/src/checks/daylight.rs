use crate::checks::Evaluation;
use crate::model::{OperationData, SceneData};
use renoguard_types::{ElementType, Rule, Violation};

pub fn check(scene: &SceneData, rules: &[&Rule]) -> Evaluation {
    let mut out = Vec::new();
    for room in scene
        .rooms
        .iter()
        .filter(|r| r.room_type.is_habitable() && !r.has_windows)
    {
        for rule in rules {
            out.push(
                Violation::from_rule(
                    rule,
                    &room.id,
                    "A habitable room must have natural light (a window).",
                )
                .element_type(ElementType::Room)
                .position(room.position)
                .suggestion("Add a window or change the room type.")
                .build(),
            );
        }
    }
    Evaluation::full(out)
}

pub fn check_operation(_scene: &SceneData, _op: &OperationData, rules: &[&Rule]) -> Evaluation {
    Evaluation::not_implemented(rules, "daylight effects of operations are not modeled")
}
