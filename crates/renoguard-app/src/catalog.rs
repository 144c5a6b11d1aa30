//! Catalog selection and listing use cases.

use anyhow::Context;
use renoguard_catalog::{ListOptions, RuleCatalog, parse_catalog_json, parse_catalog_toml};
use renoguard_types::Rule;
use serde::Serialize;

/// Where the rule catalog comes from.
#[derive(Clone, Copy, Debug)]
pub enum CatalogSource<'a> {
    Builtin,
    Toml(&'a str),
    Json(&'a str),
}

impl<'a> CatalogSource<'a> {
    /// Pick the format from a file name: `.json` is JSON, everything else TOML.
    pub fn from_file(name: &str, contents: &'a str) -> Self {
        if name.to_ascii_lowercase().ends_with(".json") {
            CatalogSource::Json(contents)
        } else {
            CatalogSource::Toml(contents)
        }
    }
}

pub fn load_catalog(source: CatalogSource<'_>) -> anyhow::Result<RuleCatalog> {
    let catalog = match source {
        CatalogSource::Builtin => RuleCatalog::builtin().context("load built-in catalog")?,
        CatalogSource::Toml(text) => parse_catalog_toml(text).context("parse rule catalog")?,
        CatalogSource::Json(text) => parse_catalog_json(text).context("parse rule catalog")?,
    };
    Ok(catalog)
}

/// One page of a rule listing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RulePage {
    pub rules: Vec<Rule>,
    pub total: usize,
}

pub fn list_rules(catalog: &RuleCatalog, opts: &ListOptions) -> RulePage {
    let (rules, total) = catalog.list(opts);
    RulePage {
        rules: rules.into_iter().cloned().collect(),
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use renoguard_types::RuleCategory;

    #[test]
    fn format_follows_extension() {
        assert!(matches!(
            CatalogSource::from_file("rules.JSON", "{}"),
            CatalogSource::Json(_)
        ));
        assert!(matches!(
            CatalogSource::from_file("rules.toml", ""),
            CatalogSource::Toml(_)
        ));
    }

    #[test]
    fn builtin_listing_pages() {
        let catalog = load_catalog(CatalogSource::Builtin).expect("builtin");
        let page = list_rules(
            &catalog,
            &ListOptions {
                category: Some(RuleCategory::WetZones),
                limit: 1,
                ..ListOptions::default()
            },
        );
        assert_eq!(page.total, 2);
        assert_eq!(page.rules.len(), 1);
    }

    #[test]
    fn broken_catalog_reports_context() {
        let err = load_catalog(CatalogSource::Toml("[[rules]]\ncode = 1")).unwrap_err();
        assert!(format!("{err:#}").starts_with("parse rule catalog"));
    }
}
