use crate::checks::Evaluation;
use crate::model::{OperationData, SceneData};
use renoguard_types::ids::min_area_param_key;
use renoguard_types::{ElementType, Rule, RoomType, Violation};

/// Default minimum area in square meters; `0.0` means unconstrained.
pub fn default_min_area(room_type: RoomType) -> f64 {
    match room_type {
        RoomType::Living => 14.0,
        RoomType::Bedroom => 8.0,
        RoomType::Kitchen => 5.0,
        RoomType::Bathroom => 3.8,
        RoomType::Toilet => 1.2,
        RoomType::Hallway | RoomType::Balcony | RoomType::Storage | RoomType::Other => 0.0,
    }
}

/// Table default, overridden by a positive `min_area_<TYPE>` parameter on the citing rule.
pub fn effective_min_area(rule: &Rule, room_type: RoomType) -> f64 {
    let default = default_min_area(room_type);
    let override_min = rule.float_param(&min_area_param_key(room_type.as_str()), 0.0);
    if override_min > 0.0 { override_min } else { default }
}

pub fn check(scene: &SceneData, rules: &[&Rule]) -> Evaluation {
    // The first rule of the category cites every room; at most one violation per room.
    let Some(rule) = rules.first() else {
        return Evaluation::none();
    };

    let mut out = Vec::new();
    for room in &scene.rooms {
        if default_min_area(room.room_type) <= 0.0 {
            continue;
        }
        let minimum = effective_min_area(rule, room.room_type);
        if room.area < minimum {
            out.push(
                Violation::from_rule(
                    rule,
                    &room.id,
                    format!(
                        "Area of room '{}' ({:.1} m²) is below the minimum ({:.1} m²).",
                        room.room_type, room.area, minimum
                    ),
                )
                .element_type(ElementType::Room)
                .position(room.position)
                .suggestion(format!("Increase the room area to at least {minimum:.1} m²."))
                .build(),
            );
        }
    }

    Evaluation::full(out)
}

/// Area-changing edits carry no resulting geometry, so in-scope rules surface as a gap.
pub fn check_operation(_scene: &SceneData, _op: &OperationData, rules: &[&Rule]) -> Evaluation {
    Evaluation::not_implemented(rules, "room-area effects of operations are not modeled")
}
