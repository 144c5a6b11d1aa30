//! Pure compliance evaluation (no IO).
//!
//! Input: a scene (and optionally one proposed operation) plus the rule catalog.
//! Output: violations, coverage gaps, and score.

#![forbid(unsafe_code)]

pub mod checks;
pub mod model;
pub mod policy;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use checks::{CategoryChecker, Coverage, Evaluation};
pub use engine::RuleEngine;
