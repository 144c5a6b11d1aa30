use crate::checks::Evaluation;
use crate::model::{OperationData, SceneData};
use renoguard_types::Rule;

const NOT_IMPLEMENTED: &str = "fire-safety rules are not evaluated yet";

pub fn check(_scene: &SceneData, rules: &[&Rule]) -> Evaluation {
    Evaluation::not_implemented(rules, NOT_IMPLEMENTED)
}

pub fn check_operation(_scene: &SceneData, _op: &OperationData, rules: &[&Rule]) -> Evaluation {
    Evaluation::not_implemented(rules, NOT_IMPLEMENTED)
}
