//! Stable identifiers: well-known rule codes and rule parameter keys.
//!
//! Rule codes are regulation citations. Checkers that gate on a specific regulation compare
//! against these constants.

// Rule codes
pub const RULE_LOAD_BEARING_WALLS: &str = "SNiP-31-01-2003-9.22";
pub const RULE_MIN_ROOM_AREA: &str = "SNiP-31-01-2003-5.7";
pub const RULE_WET_ZONE_PLACEMENT: &str = "ZHK-RF-25";
pub const RULE_WET_ZONE_WATERPROOFING: &str = "SP-54.13330-5.8";
pub const RULE_VENTILATION_CHANNELS: &str = "SP-54-VENT-CHANNELS";
pub const RULE_DAYLIGHT: &str = "SP-54-DAYLIGHT";
pub const RULE_RENOVATION_NOTICE: &str = "ZHK-RF-26";
pub const RULE_FIRE_EXITS: &str = "SP-1.13130-EXITS";

// Parameter keys
pub const PARAM_MAX_OPENING_WIDTH: &str = "max_opening_width";
/// Prefix of per-room-type area overrides, e.g. `min_area_BEDROOM`.
pub const PARAM_MIN_AREA_PREFIX: &str = "min_area_";

/// Default maximum opening width (meters) in a load-bearing wall.
pub const DEFAULT_MAX_OPENING_WIDTH: f64 = 0.9;

/// Default rules version stamped onto results.
pub const DEFAULT_RULES_VERSION: &str = "1.0.0";

pub fn min_area_param_key(room_type: &str) -> String {
    format!("{PARAM_MIN_AREA_PREFIX}{room_type}")
}
