//! Display metadata for rule categories.

use crate::taxonomy::RuleCategory;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Static description of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    pub name: &'static str,
    pub description: &'static str,
    /// Icon name used by UIs.
    pub icon: &'static str,
}

/// A category together with how many active rules it holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RuleCategoryInfo {
    pub id: RuleCategory,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub rules_count: u32,
}

impl RuleCategoryInfo {
    pub fn new(id: RuleCategory, rules_count: u32) -> Self {
        let meta = category_meta(id);
        Self {
            id,
            name: meta.name.to_string(),
            description: meta.description.to_string(),
            icon: meta.icon.to_string(),
            rules_count,
        }
    }
}

pub fn category_meta(category: RuleCategory) -> CategoryMeta {
    match category {
        RuleCategory::LoadBearing => CategoryMeta {
            name: "Load-bearing structures",
            description: "Rules for load-bearing walls and structural elements",
            icon: "wall",
        },
        RuleCategory::WetZones => CategoryMeta {
            name: "Wet zones",
            description: "Placement of bathrooms, toilets and kitchens",
            icon: "water",
        },
        RuleCategory::FireSafety => CategoryMeta {
            name: "Fire safety",
            description: "Fire safety and evacuation rules",
            icon: "fire",
        },
        RuleCategory::Ventilation => CategoryMeta {
            name: "Ventilation",
            description: "Ventilation requirements for rooms and shared channels",
            icon: "wind",
        },
        RuleCategory::MinArea => CategoryMeta {
            name: "Minimum areas",
            description: "Minimum floor area per room type",
            icon: "square",
        },
        RuleCategory::Daylight => CategoryMeta {
            name: "Natural light",
            description: "Natural daylight requirements for habitable rooms",
            icon: "sun",
        },
        RuleCategory::Accessibility => CategoryMeta {
            name: "Accessibility",
            description: "Accessibility requirements for people with reduced mobility",
            icon: "accessibility",
        },
        RuleCategory::General => CategoryMeta {
            name: "General rules",
            description: "General planning and notification rules",
            icon: "check",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_distinct_icon() {
        let mut icons: Vec<_> = RuleCategory::ALL
            .into_iter()
            .map(|c| category_meta(c).icon)
            .collect();
        icons.sort_unstable();
        icons.dedup();
        assert_eq!(icons.len(), RuleCategory::ALL.len());
    }

    #[test]
    fn info_carries_metadata() {
        let info = RuleCategoryInfo::new(RuleCategory::Daylight, 2);
        assert_eq!(info.icon, "sun");
        assert_eq!(info.rules_count, 2);
    }
}
