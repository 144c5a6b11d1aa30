//! Stable DTOs and IDs used across the renoguard workspace.
//!
//! This crate is intentionally boring:
//! - closed vocabularies (severity, category, approval, element/operation/room types)
//! - rules as supplied by a catalog, and the violations/results derived from them
//! - well-known rule codes and parameter keys
//! - category display metadata

#![forbid(unsafe_code)]

pub mod categories;
pub mod fingerprint;
pub mod ids;
pub mod result;
pub mod rule;
pub mod taxonomy;
pub mod violation;

pub use categories::{CategoryMeta, RuleCategoryInfo, category_meta};
pub use result::{ComplianceResult, ComplianceStats, CoverageGap, GapKind, compliance_score};
pub use rule::{DocumentReference, ParamValue, Rule};
pub use taxonomy::{
    ApprovalType, ElementType, OperationType, RoomType, RuleCategory, Severity, UnknownTag,
};
pub use violation::{Point2D, Violation, ViolationBuilder};
