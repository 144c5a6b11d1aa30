use crate::checks::Evaluation;
use crate::model::{OperationData, SceneData};
use renoguard_types::{ApprovalType, Rule, Violation};

/// Any matching general rule means the renovation has to be announced to local authorities.
pub fn check_operation(_scene: &SceneData, op: &OperationData, rules: &[&Rule]) -> Evaluation {
    let out = rules
        .iter()
        .map(|rule| {
            Violation::from_rule(
                rule,
                &op.element_id,
                "This renovation requires notifying the local authorities.",
            )
            .approval_at_least(ApprovalType::Notification)
            .suggestion("File a renovation notice with the local authorities.")
            .build()
        })
        .collect();

    Evaluation::full(out)
}
