use crate::catalog::RuleCatalog;
use crate::error::CatalogError;
use crate::parse::parse_catalog_toml;

const DEFAULT_CATALOG: &str = include_str!("../rules/default.toml");

impl RuleCatalog {
    /// The catalog shipped with renoguard, used when no catalog file is given.
    pub fn builtin() -> Result<Self, CatalogError> {
        parse_catalog_toml(DEFAULT_CATALOG)
    }
}
