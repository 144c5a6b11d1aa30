//! Use case orchestration for renoguard.
//!
//! This crate provides the application layer: use cases that coordinate the catalog, settings,
//! and domain layers. It is intentionally thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod catalog;
mod check;
mod input;
mod operation;
mod validate;

pub use catalog::{CatalogSource, RulePage, list_rules, load_catalog};
pub use check::{EngineInput, exit_code, load_engine, run_scene_check};
pub use input::{parse_operation_json, parse_scene_json};
pub use operation::{OperationVerdict, derive_approval, run_operation_check};
pub use validate::{ValidationResult, run_validation};

pub use renoguard_domain::RuleEngine;
