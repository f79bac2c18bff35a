//! Verdicts and validation reports.
//!
//! This module contains the [`Verdict`] produced for one rule and the
//! [`ValidationReport`] that aggregates every rule and field outcome for
//! one record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The classified outcome of evaluating one rule against one candidate.
///
/// `Fail` and `Rejected` are both negative verdicts. `Fail` carries a
/// message; `Rejected` does not. Which one a failing comparison produces
/// depends on the operator (see
/// [`evaluate`](crate::evaluation::evaluate)), and callers that need exact
/// parity must keep the two apart.
///
/// # Example
///
/// ```
/// use business_validation::models::Verdict;
///
/// let verdict = Verdict::Fail { message: "Quantity too large".to_string() };
/// assert!(verdict.is_failure());
/// assert_eq!(verdict.message(), Some("Quantity too large"));
/// assert!(Verdict::Rejected.message().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    /// The candidate satisfies the rule.
    Pass,
    /// The candidate violates the rule; carries the failure message.
    Fail {
        /// The rule's error message with the comparison diagnostic.
        message: String,
    },
    /// The candidate violates the rule and no message was produced.
    Rejected,
    /// The rule itself cannot be evaluated.
    ConfigError {
        /// Why the rule is not evaluable.
        reason: String,
    },
    /// The operand or candidate is not convertible to an integer.
    CoercionError {
        /// What failed to convert.
        reason: String,
    },
}

impl Verdict {
    /// Returns true for [`Verdict::Pass`].
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true for a negative verdict on valid configuration
    /// (`Fail` or `Rejected`).
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Fail { .. } | Self::Rejected)
    }

    /// Returns true when the rule could not be evaluated
    /// (`ConfigError` or `CoercionError`).
    pub fn is_configuration_problem(&self) -> bool {
        matches!(self, Self::ConfigError { .. } | Self::CoercionError { .. })
    }

    /// Returns the failure message or error reason, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Fail { message } => Some(message.as_str()),
            Self::ConfigError { reason } | Self::CoercionError { reason } => Some(reason.as_str()),
            Self::Pass | Self::Rejected => None,
        }
    }
}

/// The verdict for one rule of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// The rule's name.
    pub rule_name: String,
    /// The field the rule tested, if it names one.
    pub target_field: Option<String>,
    /// The verdict.
    pub verdict: Verdict,
}

/// A constraint a field value broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum FieldViolation {
    /// A required field has no value.
    MissingRequired,
    /// The value is shorter than `min` characters.
    TooShort {
        /// The configured minimum length.
        min: usize,
        /// The value's length.
        actual: usize,
    },
    /// The value is longer than `max` characters.
    TooLong {
        /// The configured maximum length.
        max: usize,
        /// The value's length.
        actual: usize,
    },
    /// An integer field holds a value that is not an integer.
    NotAnInteger {
        /// The offending value.
        value: String,
    },
    /// The field's own bounds are inconsistent: negative, or `min > max`.
    InvalidBounds {
        /// The configured minimum length.
        min: i64,
        /// The configured maximum length.
        max: i64,
    },
}

impl FieldViolation {
    /// Returns true when the violation is in the field definition rather
    /// than in the submitted value.
    pub fn is_configuration_problem(&self) -> bool {
        matches!(self, Self::InvalidBounds { .. })
    }

    /// Returns a human-readable description for the named field.
    pub fn describe(&self, field_name: &str) -> String {
        match self {
            Self::MissingRequired => format!("{} is required", field_name),
            Self::TooShort { min, actual } => format!(
                "{} must be at least {} characters (got {})",
                field_name, min, actual
            ),
            Self::TooLong { max, actual } => format!(
                "{} must be at most {} characters (got {})",
                field_name, max, actual
            ),
            Self::NotAnInteger { value } => {
                format!("{} must be an integer (got '{}')", field_name, value)
            }
            Self::InvalidBounds { min, max } => format!(
                "{} has invalid length bounds (minLength {}, maxLength {})",
                field_name, min, max
            ),
        }
    }
}

/// The constraint check result for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOutcome {
    /// The field's name.
    pub field_name: String,
    /// The value the field resolved to, if any.
    pub value: Option<String>,
    /// Every constraint the value broke, in check order.
    pub violations: Vec<FieldViolation>,
}

impl FieldOutcome {
    /// Returns true when no constraint was broken.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// The complete result of validating one record against one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Unique identifier for this validation run.
    pub report_id: Uuid,
    /// When the validation was performed.
    pub timestamp: DateTime<Utc>,
    /// The template the record was validated against.
    pub template_name: String,
    /// One outcome per field, in template order.
    pub fields: Vec<FieldOutcome>,
    /// One outcome per rule, in template order.
    pub rules: Vec<RuleOutcome>,
}

impl ValidationReport {
    /// Returns true when every field is valid and every rule passed.
    ///
    /// Rules that could not be evaluated count against validity.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(FieldOutcome::is_valid)
            && self.rules.iter().all(|outcome| outcome.verdict.is_pass())
    }

    /// Returns the rule outcomes with a negative verdict.
    pub fn failures(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.rules.iter().filter(|outcome| outcome.verdict.is_failure())
    }

    /// Returns the rule outcomes that could not be evaluated.
    pub fn configuration_problems(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.rules
            .iter()
            .filter(|outcome| outcome.verdict.is_configuration_problem())
    }

    /// Collects every human-readable message: field violations first, then
    /// rule messages. `Rejected` verdicts contribute nothing.
    pub fn error_messages(&self) -> Vec<String> {
        let field_messages = self.fields.iter().flat_map(|outcome| {
            outcome
                .violations
                .iter()
                .map(|violation| violation.describe(&outcome.field_name))
        });
        let rule_messages = self
            .rules
            .iter()
            .filter_map(|outcome| outcome.verdict.message().map(str::to_string));
        field_messages.chain(rule_messages).collect()
    }
}
