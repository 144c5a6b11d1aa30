use crate::catalog::RuleCatalog;
use crate::error::CatalogError;
use renoguard_types::Rule;
use renoguard_types::ids::DEFAULT_RULES_VERSION;
use serde::Deserialize;

/// On-disk catalog layout shared by the TOML and JSON formats.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    rules: Vec<Rule>,
}

impl CatalogFile {
    fn into_catalog(self) -> Result<RuleCatalog, CatalogError> {
        let version = self
            .version
            .unwrap_or_else(|| DEFAULT_RULES_VERSION.to_string());
        let catalog = RuleCatalog::new(version, self.rules)?;
        tracing::debug!(
            version = catalog.version(),
            rules = catalog.len(),
            active = catalog.count_active(),
            "rule catalog loaded"
        );
        Ok(catalog)
    }
}

/// Parse a TOML catalog (`version` plus `[[rules]]` tables).
pub fn parse_catalog_toml(input: &str) -> Result<RuleCatalog, CatalogError> {
    let file: CatalogFile = toml::from_str(input)?;
    file.into_catalog()
}

/// Parse a JSON catalog (`{"version": ..., "rules": [...]}`).
pub fn parse_catalog_json(input: &str) -> Result<RuleCatalog, CatalogError> {
    let file: CatalogFile = serde_json::from_str(input)?;
    file.into_catalog()
}
