//! Closed vocabularies shared by rules, scenes, and results.
//!
//! Wire tags follow the rule catalog format: upper-case for severities, approvals,
//! element/operation/room types; snake_case for categories.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity tier of a rule violation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[serde(alias = "info")]
    Info,
    #[serde(alias = "warning", alias = "warn", alias = "WARN")]
    Warning,
    #[serde(alias = "error")]
    Error,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Info];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl FromStr for Severity {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(UnknownTag::new("severity", s)),
        }
    }
}

/// The fixed domains a rule belongs to.
///
/// Declaration order is the canonical evaluation order of the engine.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    LoadBearing,
    WetZones,
    FireSafety,
    Ventilation,
    MinArea,
    Daylight,
    Accessibility,
    General,
}

impl RuleCategory {
    pub const ALL: [RuleCategory; 8] = [
        RuleCategory::LoadBearing,
        RuleCategory::WetZones,
        RuleCategory::FireSafety,
        RuleCategory::Ventilation,
        RuleCategory::MinArea,
        RuleCategory::Daylight,
        RuleCategory::Accessibility,
        RuleCategory::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleCategory::LoadBearing => "load_bearing",
            RuleCategory::WetZones => "wet_zones",
            RuleCategory::FireSafety => "fire_safety",
            RuleCategory::Ventilation => "ventilation",
            RuleCategory::MinArea => "min_area",
            RuleCategory::Daylight => "daylight",
            RuleCategory::Accessibility => "accessibility",
            RuleCategory::General => "general",
        }
    }
}

impl FromStr for RuleCategory {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownTag::new("category", s))
    }
}

/// Escalation tier required to waive a violation.
///
/// Ordering is precedence: `Prohibited` dominates everything else.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApprovalType {
    #[default]
    None,
    Notification,
    Project,
    Expertise,
    Prohibited,
}

impl ApprovalType {
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalType::None => "NONE",
            ApprovalType::Notification => "NOTIFICATION",
            ApprovalType::Project => "PROJECT",
            ApprovalType::Expertise => "EXPERTISE",
            ApprovalType::Prohibited => "PROHIBITED",
        }
    }
}

/// Scene element a rule or violation refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementType {
    Wall,
    LoadBearingWall,
    Room,
    Door,
    Window,
    WetZone,
    Kitchen,
    Bathroom,
    Toilet,
    Sink,
    Ventilation,
}

/// Proposed edit operation kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    DemolishWall,
    AddWall,
    MoveWall,
    AddOpening,
    CloseOpening,
    MergeRooms,
    SplitRoom,
    ChangeRoomType,
    MoveWetZone,
    ExpandWetZone,
    MovePlumbing,
    MoveVentilation,
}

impl OperationType {
    pub const ALL: [OperationType; 12] = [
        OperationType::DemolishWall,
        OperationType::AddWall,
        OperationType::MoveWall,
        OperationType::AddOpening,
        OperationType::CloseOpening,
        OperationType::MergeRooms,
        OperationType::SplitRoom,
        OperationType::ChangeRoomType,
        OperationType::MoveWetZone,
        OperationType::ExpandWetZone,
        OperationType::MovePlumbing,
        OperationType::MoveVentilation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OperationType::DemolishWall => "DEMOLISH_WALL",
            OperationType::AddWall => "ADD_WALL",
            OperationType::MoveWall => "MOVE_WALL",
            OperationType::AddOpening => "ADD_OPENING",
            OperationType::CloseOpening => "CLOSE_OPENING",
            OperationType::MergeRooms => "MERGE_ROOMS",
            OperationType::SplitRoom => "SPLIT_ROOM",
            OperationType::ChangeRoomType => "CHANGE_ROOM_TYPE",
            OperationType::MoveWetZone => "MOVE_WET_ZONE",
            OperationType::ExpandWetZone => "EXPAND_WET_ZONE",
            OperationType::MovePlumbing => "MOVE_PLUMBING",
            OperationType::MoveVentilation => "MOVE_VENTILATION",
        }
    }
}

impl FromStr for OperationType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        OperationType::ALL
            .into_iter()
            .find(|op| op.as_str() == upper)
            .ok_or_else(|| UnknownTag::new("operation type", s))
    }
}

/// Room classification as reported by the scene.
///
/// Unknown tags decode to `Other` so new scene room kinds never fail a check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Living,
    Bedroom,
    Kitchen,
    Bathroom,
    Toilet,
    Hallway,
    Balcony,
    Storage,
    #[serde(other)]
    Other,
}

impl RoomType {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::Living => "LIVING",
            RoomType::Bedroom => "BEDROOM",
            RoomType::Kitchen => "KITCHEN",
            RoomType::Bathroom => "BATHROOM",
            RoomType::Toilet => "TOILET",
            RoomType::Hallway => "HALLWAY",
            RoomType::Balcony => "BALCONY",
            RoomType::Storage => "STORAGE",
            RoomType::Other => "OTHER",
        }
    }

    /// Rooms that count as habitable space for daylight purposes.
    pub fn is_habitable(self) -> bool {
        matches!(self, RoomType::Living | RoomType::Bedroom)
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(Severity, RuleCategory, ApprovalType, OperationType, RoomType);

/// A string tag that does not name any variant of the target vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownTag {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownTag {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
