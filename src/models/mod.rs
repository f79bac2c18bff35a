//! Core data models for the Business Validation Engine.
//!
//! Models are immutable snapshots: the loader builds them once and the
//! evaluator only reads them.

mod field;
mod record;
mod rule;
mod template;
mod verdict;

pub use field::{Binding, Field, FieldType, LocationHints};
pub use record::{Candidate, Record};
pub use rule::{ComparisonLogic, OperatorKind, Rule};
pub use template::Template;
pub use verdict::{FieldOutcome, FieldViolation, RuleOutcome, ValidationReport, Verdict};
