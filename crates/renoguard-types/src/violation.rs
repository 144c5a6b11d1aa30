use crate::fingerprint::fingerprint;
use crate::rule::{DocumentReference, Rule};
use crate::taxonomy::{ApprovalType, ElementType, RuleCategory, Severity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A point on the floor plan, in plan coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One rule failing against one scene element or operation.
///
/// Built once through [`ViolationBuilder`] and never updated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    /// Stable fingerprint over rule id, rule code, element id and description.
    pub id: String,
    pub rule_id: String,
    pub rule_code: String,
    pub severity: Severity,
    pub category: RuleCategory,
    pub title: String,
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<ElementType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point2D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<DocumentReference>,
    pub approval_required: ApprovalType,
}

impl Violation {
    /// Start a violation citing `rule`; identity fields are copied from the rule now.
    pub fn from_rule(
        rule: &Rule,
        element_id: impl Into<String>,
        description: impl Into<String>,
    ) -> ViolationBuilder {
        let element_id = element_id.into();
        ViolationBuilder {
            rule_id: rule.id.clone(),
            rule_code: rule.code.clone(),
            severity: rule.severity,
            category: rule.category,
            title: rule.name.clone(),
            description: description.into(),
            element_id: (!element_id.is_empty()).then_some(element_id),
            element_type: None,
            position: None,
            suggestion: None,
            references: rule.references.clone(),
            approval_required: rule.approval_required,
        }
    }

    /// A blocking violation cannot be approved away.
    pub fn is_blocking(&self) -> bool {
        self.approval_required == ApprovalType::Prohibited || self.severity == Severity::Error
    }
}

#[derive(Clone, Debug)]
#[must_use]
pub struct ViolationBuilder {
    rule_id: String,
    rule_code: String,
    severity: Severity,
    category: RuleCategory,
    title: String,
    description: String,
    element_id: Option<String>,
    element_type: Option<ElementType>,
    position: Option<Point2D>,
    suggestion: Option<String>,
    references: Vec<DocumentReference>,
    approval_required: ApprovalType,
}

impl ViolationBuilder {
    pub fn element_type(mut self, element_type: ElementType) -> Self {
        self.element_type = Some(element_type);
        self
    }

    pub fn position(mut self, position: Point2D) -> Self {
        self.position = Some(position);
        self
    }

    pub fn suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Override the severity inherited from the rule.
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Raise the approval tier to at least `floor`.
    pub fn approval_at_least(mut self, floor: ApprovalType) -> Self {
        self.approval_required = self.approval_required.max(floor);
        self
    }

    pub fn build(self) -> Violation {
        let id = fingerprint(&[
            &self.rule_id,
            &self.rule_code,
            self.element_id.as_deref().unwrap_or(""),
            &self.description,
        ]);
        Violation {
            id,
            rule_id: self.rule_id,
            rule_code: self.rule_code,
            severity: self.severity,
            category: self.category,
            title: self.title,
            description: self.description,
            element_id: self.element_id,
            element_type: self.element_type,
            position: self.position,
            suggestion: self.suggestion,
            references: self.references,
            approval_required: self.approval_required,
        }
    }
}
