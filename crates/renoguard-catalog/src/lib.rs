//! Rule catalog boundary.
//!
//! Parses TOML/JSON rule catalogs into validated [`RuleCatalog`] values and answers listing and
//! lookup queries over them. IO-free: callers pass document contents as strings.

#![forbid(unsafe_code)]

mod builtin;
mod catalog;
mod error;
mod parse;

pub use catalog::{ListOptions, RuleCatalog};
pub use error::CatalogError;
pub use parse::{parse_catalog_json, parse_catalog_toml};
