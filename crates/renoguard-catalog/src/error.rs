//! Errors raised while loading a rule catalog.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The TOML document could not be decoded into rules.
    #[error("invalid TOML rule catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// The JSON document could not be decoded into rules.
    #[error("invalid JSON rule catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rule #{index} has an empty code")]
    EmptyCode { index: usize },

    #[error("duplicate rule id '{id}'")]
    DuplicateId { id: String },

    #[error("duplicate rule code '{code}'")]
    DuplicateCode { code: String },

    /// Numeric thresholds (areas, widths) must not be negative.
    #[error("rule '{code}': parameter '{key}' must not be negative (got {value})")]
    NegativeParameter {
        code: String,
        key: String,
        value: f64,
    },
}
