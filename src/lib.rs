//! Business Validation Engine
//!
//! This crate evaluates declarative business rules, loaded from JSON or YAML
//! definitions, against submitted data records and reports a classified
//! verdict for every rule.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod session;
