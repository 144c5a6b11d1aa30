//! Fuzz target for scene and operation checks.
//!
//! Goal: once a scene decodes, checking it against the built-in catalog should **never panic**,
//! and the score must stay within 0..=100.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_scene_check
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use renoguard_app::{CatalogSource, RuleEngine, load_catalog, parse_scene_json};
use renoguard_domain::model::OperationData;
use renoguard_types::OperationType;

#[derive(Arbitrary, Debug)]
struct CheckInput {
    scene_json: String,
    op_index: u8,
    element_id: String,
}

fuzz_target!(|input: CheckInput| {
    // Limit input size to keep fuzzing fast
    if input.scene_json.len() > 16 * 1024 {
        return;
    }
    let Ok(scene) = parse_scene_json(&input.scene_json) else {
        return;
    };
    let Ok(catalog) = load_catalog(CatalogSource::Builtin) else {
        return;
    };
    let engine = RuleEngine::new(catalog.into_rules());

    let result = engine.check_scene(&scene);
    assert!(result.stats.compliance_score <= 100);

    let op_type = OperationType::ALL[usize::from(input.op_index) % OperationType::ALL.len()];
    let op = OperationData::new(op_type, &input.element_id);
    let verdict = engine.check_operation(&scene, &op);
    assert!(verdict.stats.compliance_score <= 100);
});
