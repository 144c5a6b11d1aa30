//! Boundary adapters: JSON documents into domain input values.

use anyhow::Context;
use renoguard_domain::model::{OperationData, SceneData};

/// Parse a scene document and reject values no checker can reason about.
pub fn parse_scene_json(input: &str) -> anyhow::Result<SceneData> {
    let scene: SceneData = serde_json::from_str(input).context("parse scene JSON")?;
    for room in &scene.rooms {
        anyhow::ensure!(
            room.area.is_finite() && room.area >= 0.0,
            "room '{}' has an invalid area: {}",
            room.id,
            room.area
        );
    }
    Ok(scene)
}

pub fn parse_operation_json(input: &str) -> anyhow::Result<OperationData> {
    let op: OperationData = serde_json::from_str(input).context("parse operation JSON")?;
    anyhow::ensure!(
        !op.element_id.trim().is_empty(),
        "operation {} has no element_id",
        op.op_type
    );
    Ok(op)
}
