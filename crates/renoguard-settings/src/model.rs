use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `renoguard.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional so a partial file layers over
/// the chosen profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RenoguardConfigV1 {
    /// Optional schema string for tooling (`renoguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset: `strict` (default) or `advisory`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Rule-set version stamped on results. Defaults to the catalog's version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,

    /// Fail when some in-scope rules could not be evaluated.
    ///
    /// Categories turned off under `[categories]` are out of scope and never count as gaps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_full_coverage: Option<bool>,

    /// Map of category id (e.g. `fire_safety`) -> config.
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryConfig {
    /// `false` excludes the category's rules from evaluation and counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
