//! Evaluation logic for the Business Validation Engine.
//!
//! This module contains the rule evaluator, integer coercion of operands
//! and candidates, field constraint checks, and validation of a whole
//! record against a template.

mod coercion;
mod evaluator;
mod field_checks;
mod record_validation;

pub use coercion::{CoercionFailure, coerce_candidate, coerce_integer};
pub use evaluator::{evaluate, evaluate_rules};
pub use field_checks::check_field;
pub use record_validation::validate_record;
