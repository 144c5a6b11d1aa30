use crate::fingerprint::rule_id_for_code;
use crate::ids::DEFAULT_RULES_VERSION;
use crate::taxonomy::{ApprovalType, ElementType, OperationType, RuleCategory, Severity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// A typed rule parameter, decoded once when the catalog is loaded.
///
/// Variant order matters for untagged decoding: integers stay `Int`, only values with a
/// fractional part or exponent become `Float`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ParamValue {
    /// Numeric view of the parameter; `None` for strings and booleans.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Int(v) => Some(*v as f64),
            ParamValue::Bool(_) | ParamValue::Str(_) => None,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

/// Citation of a regulatory document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentReference {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A compliance rule as supplied by the catalog.
///
/// The engine treats rules as immutable; only catalog/administration code builds them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rule {
    /// Unique id. Catalogs may omit it; a stable id is then derived from `code`.
    #[serde(default)]
    pub id: String,

    /// Regulation citation, e.g. `SNiP-31-01-2003-9.22`.
    pub code: String,
    pub category: RuleCategory,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub severity: Severity,

    #[serde(default = "default_active")]
    pub active: bool,

    #[serde(default)]
    pub applies_to: Vec<ElementType>,
    #[serde(default)]
    pub applies_to_operations: Vec<OperationType>,
    #[serde(default)]
    pub approval_required: ApprovalType,

    /// Numeric thresholds and other tunables, keyed by name.
    #[serde(default)]
    pub parameters: BTreeMap<String, ParamValue>,
    #[serde(default)]
    pub references: Vec<DocumentReference>,

    #[serde(default = "default_version")]
    pub version: String,

    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

fn default_active() -> bool {
    true
}

fn default_version() -> String {
    DEFAULT_RULES_VERSION.to_string()
}

impl Rule {
    /// An active rule with default version and no approval requirement.
    pub fn new(code: &str, name: &str, category: RuleCategory, severity: Severity) -> Self {
        Self {
            id: rule_id_for_code(code),
            code: code.to_string(),
            category,
            name: name.to_string(),
            description: String::new(),
            severity,
            active: true,
            applies_to: Vec::new(),
            applies_to_operations: Vec::new(),
            approval_required: ApprovalType::None,
            parameters: BTreeMap::new(),
            references: Vec::new(),
            version: default_version(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_operations(mut self, ops: &[OperationType]) -> Self {
        self.applies_to_operations = ops.to_vec();
        self
    }

    pub fn with_elements(mut self, elements: &[ElementType]) -> Self {
        self.applies_to = elements.to_vec();
        self
    }

    pub fn with_approval(mut self, approval: ApprovalType) -> Self {
        self.approval_required = approval;
        self
    }

    pub fn with_param(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.parameters.insert(key.to_string(), value.into());
        self
    }

    pub fn with_reference(mut self, reference: DocumentReference) -> Self {
        self.references.push(reference);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.parameters.get(key)
    }

    /// Numeric parameter with coercion from integers; `default` when absent or non-numeric.
    pub fn float_param(&self, key: &str, default: f64) -> f64 {
        self.param(key).and_then(ParamValue::as_f64).unwrap_or(default)
    }

    pub fn applies_to_operation(&self, op: OperationType) -> bool {
        self.applies_to_operations.contains(&op)
    }

    pub fn applies_to_element(&self, element: ElementType) -> bool {
        self.applies_to.contains(&element)
    }
}
