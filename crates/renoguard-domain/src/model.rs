//! Plain input values for one check call.
//!
//! Elements reference each other by opaque string ids; lookups are linear scans.

use renoguard_types::{ElementType, OperationType, Point2D, RoomType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneData {
    pub id: String,
    #[serde(default)]
    pub rooms: Vec<RoomData>,
    #[serde(default)]
    pub walls: Vec<WallData>,
    #[serde(default)]
    pub equipment: Vec<EquipmentData>,
    #[serde(default)]
    pub total_area: f64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomData {
    pub id: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub area: f64,
    #[serde(default)]
    pub has_windows: bool,
    #[serde(default)]
    pub is_wet_zone: bool,
    #[serde(default)]
    pub wall_ids: Vec<String>,
    #[serde(default)]
    pub equipment_ids: Vec<String>,
    #[serde(default)]
    pub position: Point2D,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WallData {
    pub id: String,
    #[serde(default)]
    pub is_load_bearing: bool,
    #[serde(default)]
    pub thickness: f64,
    #[serde(default)]
    pub has_openings: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentData {
    pub id: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    #[serde(default)]
    pub room_id: String,
}

/// A single proposed edit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperationData {
    #[serde(rename = "type")]
    pub op_type: OperationType,
    #[serde(default)]
    pub element_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<ElementType>,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_position: Option<Point2D>,
}

impl SceneData {
    pub fn wall(&self, id: &str) -> Option<&WallData> {
        self.walls.iter().find(|w| w.id == id)
    }

    pub fn room(&self, id: &str) -> Option<&RoomData> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn wet_zones(&self) -> impl Iterator<Item = &RoomData> {
        self.rooms.iter().filter(|r| r.is_wet_zone)
    }
}

impl OperationData {
    pub fn new(op_type: OperationType, element_id: &str) -> Self {
        Self {
            op_type,
            element_id: element_id.to_string(),
            element_type: None,
            params: BTreeMap::new(),
            new_position: None,
        }
    }

    pub fn with_element_type(mut self, element_type: ElementType) -> Self {
        self.element_type = Some(element_type);
        self
    }
}
