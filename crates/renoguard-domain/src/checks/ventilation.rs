use crate::checks::Evaluation;
use crate::model::{OperationData, SceneData};
use renoguard_types::{ElementType, OperationType, Rule, Severity, Violation};

/// Moving a ventilation channel is forbidden outright, whatever the rule's own severity.
pub fn check_operation(_scene: &SceneData, op: &OperationData, rules: &[&Rule]) -> Evaluation {
    if op.op_type != OperationType::MoveVentilation {
        return Evaluation::none();
    }

    let out = rules
        .iter()
        .map(|rule| {
            Violation::from_rule(
                rule,
                &op.element_id,
                "Relocating or resizing ventilation channels is strictly prohibited.",
            )
            .severity(Severity::Error)
            .element_type(ElementType::Ventilation)
            .suggestion("Leave the ventilation channels unchanged.")
            .build()
        })
        .collect();

    Evaluation::full(out)
}
