use crate::model::{RoomData, SceneData, WallData};
use renoguard_types::{Point2D, RoomType, Rule, RuleCategory, Severity};

pub fn rule(code: &str, category: RuleCategory, severity: Severity) -> Rule {
    Rule::new(code, &format!("rule {code}"), category, severity)
}

pub fn room(id: &str, room_type: RoomType, area: f64) -> RoomData {
    RoomData {
        id: id.to_string(),
        room_type,
        area,
        has_windows: true,
        is_wet_zone: matches!(
            room_type,
            RoomType::Kitchen | RoomType::Bathroom | RoomType::Toilet
        ),
        wall_ids: Vec::new(),
        equipment_ids: Vec::new(),
        position: Point2D::new(area, area * 2.0),
    }
}

pub fn bedroom(id: &str, area: f64) -> RoomData {
    room(id, RoomType::Bedroom, area)
}

pub fn windowless(mut room: RoomData) -> RoomData {
    room.has_windows = false;
    room
}

pub fn load_bearing_wall(id: &str) -> WallData {
    WallData {
        id: id.to_string(),
        is_load_bearing: true,
        thickness: 0.3,
        has_openings: false,
    }
}

pub fn partition_wall(id: &str) -> WallData {
    WallData {
        id: id.to_string(),
        is_load_bearing: false,
        thickness: 0.1,
        has_openings: false,
    }
}

pub fn scene(rooms: Vec<RoomData>, walls: Vec<WallData>) -> SceneData {
    let total_area = rooms.iter().map(|r| r.area).sum();
    SceneData {
        id: "scene-1".to_string(),
        rooms,
        walls,
        equipment: Vec::new(),
        total_area,
        metadata: Default::default(),
    }
}
