use renoguard_types::RuleCategory;
use renoguard_types::ids::DEFAULT_RULES_VERSION;
use std::collections::BTreeSet;

/// Effective engine configuration, resolved by the settings layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub profile: String,
    pub rules_version: String,
    /// Fan out per-category evaluation over the rayon pool.
    pub parallel: bool,
    /// Non-compliance fails the run. Off for advisory profiles.
    pub enforce: bool,
    /// Callers should treat coverage gaps as failures. Disabled categories are out of
    /// scope and produce no gaps.
    pub require_full_coverage: bool,
    /// Categories whose rules are excluded from evaluation, rule counts and coverage gaps.
    pub disabled_categories: BTreeSet<RuleCategory>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            profile: "strict".to_string(),
            rules_version: DEFAULT_RULES_VERSION.to_string(),
            parallel: true,
            enforce: true,
            require_full_coverage: false,
            disabled_categories: BTreeSet::new(),
        }
    }
}

impl EngineConfig {
    pub fn is_enabled(&self, category: RuleCategory) -> bool {
        !self.disabled_categories.contains(&category)
    }
}
