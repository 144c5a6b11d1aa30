use crate::model::{OperationData, SceneData};
use renoguard_types::{Rule, RuleCategory, Violation};

mod daylight;
mod fire_safety;
mod general;
mod load_bearing;
mod min_area;
mod ventilation;
mod wet_zone;


/// The fixed set of per-category evaluators.
///
/// Dispatch is a closed `match`: adding a category without deciding its checker is a
/// compile error in [`CategoryChecker::for_category`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryChecker {
    LoadBearing,
    WetZone,
    MinArea,
    Ventilation,
    FireSafety,
    Daylight,
    General,
}

/// How much of its rules' intent a checker actually evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Coverage {
    #[default]
    Full,
    Partial(&'static str),
    NotImplemented(&'static str),
}

/// Output of one checker invocation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Evaluation {
    pub violations: Vec<Violation>,
    pub coverage: Coverage,
}

impl Evaluation {
    pub fn full(violations: Vec<Violation>) -> Self {
        Self {
            violations,
            coverage: Coverage::Full,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// Nothing evaluated; a gap is reported only when rules were actually in scope.
    pub fn not_implemented(rules: &[&Rule], note: &'static str) -> Self {
        if rules.is_empty() {
            return Self::none();
        }
        Self {
            violations: Vec::new(),
            coverage: Coverage::NotImplemented(note),
        }
    }
}

impl CategoryChecker {
    pub const REGISTERED: [CategoryChecker; 7] = [
        CategoryChecker::LoadBearing,
        CategoryChecker::WetZone,
        CategoryChecker::MinArea,
        CategoryChecker::Ventilation,
        CategoryChecker::FireSafety,
        CategoryChecker::Daylight,
        CategoryChecker::General,
    ];

    pub fn for_category(category: RuleCategory) -> Option<Self> {
        match category {
            RuleCategory::LoadBearing => Some(CategoryChecker::LoadBearing),
            RuleCategory::WetZones => Some(CategoryChecker::WetZone),
            RuleCategory::MinArea => Some(CategoryChecker::MinArea),
            RuleCategory::Ventilation => Some(CategoryChecker::Ventilation),
            RuleCategory::FireSafety => Some(CategoryChecker::FireSafety),
            RuleCategory::Daylight => Some(CategoryChecker::Daylight),
            RuleCategory::General => Some(CategoryChecker::General),
            RuleCategory::Accessibility => None,
        }
    }

    pub fn category(self) -> RuleCategory {
        match self {
            CategoryChecker::LoadBearing => RuleCategory::LoadBearing,
            CategoryChecker::WetZone => RuleCategory::WetZones,
            CategoryChecker::MinArea => RuleCategory::MinArea,
            CategoryChecker::Ventilation => RuleCategory::Ventilation,
            CategoryChecker::FireSafety => RuleCategory::FireSafety,
            CategoryChecker::Daylight => RuleCategory::Daylight,
            CategoryChecker::General => RuleCategory::General,
        }
    }

    /// Whole-scene structural check.
    pub fn check(self, scene: &SceneData, rules: &[&Rule]) -> Evaluation {
        match self {
            CategoryChecker::LoadBearing => Evaluation::none(),
            CategoryChecker::WetZone => wet_zone::check(scene, rules),
            CategoryChecker::MinArea => min_area::check(scene, rules),
            CategoryChecker::Ventilation => Evaluation::none(),
            CategoryChecker::FireSafety => fire_safety::check(scene, rules),
            CategoryChecker::Daylight => daylight::check(scene, rules),
            CategoryChecker::General => Evaluation::none(),
        }
    }

    /// Check of a single proposed edit against the scene it would apply to.
    pub fn check_operation(
        self,
        scene: &SceneData,
        op: &OperationData,
        rules: &[&Rule],
    ) -> Evaluation {
        match self {
            CategoryChecker::LoadBearing => load_bearing::check_operation(scene, op, rules),
            CategoryChecker::WetZone => wet_zone::check_operation(scene, op, rules),
            CategoryChecker::MinArea => min_area::check_operation(scene, op, rules),
            CategoryChecker::Ventilation => ventilation::check_operation(scene, op, rules),
            CategoryChecker::FireSafety => fire_safety::check_operation(scene, op, rules),
            CategoryChecker::Daylight => daylight::check_operation(scene, op, rules),
            CategoryChecker::General => general::check_operation(scene, op, rules),
        }
    }
}
