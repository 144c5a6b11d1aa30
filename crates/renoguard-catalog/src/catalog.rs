use crate::error::CatalogError;
use renoguard_types::fingerprint::rule_id_for_code;
use renoguard_types::ids::DEFAULT_RULES_VERSION;
use renoguard_types::{ElementType, OperationType, Rule, RuleCategory, RuleCategoryInfo, Severity};
use std::collections::{BTreeMap, BTreeSet};

/// Filters and pagination for [`RuleCatalog::list`].
///
/// `limit == 0` means no limit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub category: Option<RuleCategory>,
    pub severity: Option<Severity>,
    pub active_only: bool,
    pub limit: usize,
    pub offset: usize,
}

/// A validated, in-memory rule set.
///
/// Rules are kept ordered by category, then code; every listing follows that order.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleCatalog {
    version: String,
    rules: Vec<Rule>,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self {
            version: DEFAULT_RULES_VERSION.to_string(),
            rules: Vec::new(),
        }
    }
}

impl RuleCatalog {
    /// Validate `rules` and build a catalog.
    ///
    /// Rules without an id get one derived from their code.
    pub fn new(version: impl Into<String>, rules: Vec<Rule>) -> Result<Self, CatalogError> {
        let mut rules = rules;
        let mut ids = BTreeSet::new();
        let mut codes = BTreeSet::new();

        for (index, rule) in rules.iter_mut().enumerate() {
            if rule.code.trim().is_empty() {
                return Err(CatalogError::EmptyCode { index });
            }
            if rule.id.is_empty() {
                rule.id = rule_id_for_code(&rule.code);
            }
            if !ids.insert(rule.id.clone()) {
                return Err(CatalogError::DuplicateId {
                    id: rule.id.clone(),
                });
            }
            if !codes.insert(rule.code.clone()) {
                return Err(CatalogError::DuplicateCode {
                    code: rule.code.clone(),
                });
            }
            for (key, value) in &rule.parameters {
                if let Some(v) = value.as_f64()
                    && v < 0.0
                {
                    return Err(CatalogError::NegativeParameter {
                        code: rule.code.clone(),
                        key: key.clone(),
                        value: v,
                    });
                }
            }
        }

        rules.sort_by(|a, b| (a.category, &a.code).cmp(&(b.category, &b.code)));
        Ok(Self {
            version: version.into(),
            rules,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn get_by_code(&self, code: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.code == code)
    }

    /// Filtered page of rules plus the number of rules matching the filters before paging.
    pub fn list(&self, opts: &ListOptions) -> (Vec<&Rule>, usize) {
        let matching: Vec<&Rule> = self
            .rules
            .iter()
            .filter(|r| opts.category.is_none_or(|c| r.category == c))
            .filter(|r| opts.severity.is_none_or(|s| r.severity == s))
            .filter(|r| !opts.active_only || r.active)
            .collect();
        let total = matching.len();

        let limit = if opts.limit == 0 { usize::MAX } else { opts.limit };
        let page = matching.into_iter().skip(opts.offset).take(limit).collect();
        (page, total)
    }

    /// Active rules that name `op` among their operations.
    pub fn for_operation(&self, op: OperationType) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|r| r.active && r.applies_to_operation(op))
            .collect()
    }

    /// Active rules that name `element` among their element types.
    pub fn for_element_type(&self, element: ElementType) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|r| r.active && r.applies_to_element(element))
            .collect()
    }

    /// Categories holding at least one active rule, with counts and display metadata.
    pub fn categories(&self) -> Vec<RuleCategoryInfo> {
        let mut counts: BTreeMap<RuleCategory, u32> = BTreeMap::new();
        for rule in self.rules.iter().filter(|r| r.active) {
            *counts.entry(rule.category).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(category, count)| RuleCategoryInfo::new(category, count))
            .collect()
    }

    pub fn count_active(&self) -> usize {
        self.rules.iter().filter(|r| r.active).count()
    }
}
