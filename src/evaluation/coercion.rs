//! Integer coercion of operands and candidates.

use std::num::IntErrorKind;

use thiserror::Error;

use crate::models::Candidate;

/// Why a value could not be read as an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionFailure {
    /// The value was empty or whitespace.
    #[error("empty value is not an integer")]
    Empty,
    /// The value is not an integer literal.
    #[error("'{text}' is not an integer")]
    NotAnInteger {
        /// The offending text.
        text: String,
    },
    /// The value is an integer literal outside the supported range.
    #[error("'{text}' is out of range for an integer")]
    OutOfRange {
        /// The offending text.
        text: String,
    },
}

/// Reads text as a signed integer.
///
/// Surrounding whitespace is ignored and a leading `+` or `-` is accepted.
///
/// # Examples
///
/// ```
/// use business_validation::evaluation::{CoercionFailure, coerce_integer};
///
/// assert_eq!(coerce_integer(" 42 "), Ok(42));
/// assert_eq!(coerce_integer("-7"), Ok(-7));
/// assert_eq!(
///     coerce_integer("abc"),
///     Err(CoercionFailure::NotAnInteger { text: "abc".to_string() })
/// );
/// ```
pub fn coerce_integer(text: &str) -> Result<i64, CoercionFailure> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoercionFailure::Empty);
    }

    trimmed.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CoercionFailure::OutOfRange {
            text: trimmed.to_string(),
        },
        _ => CoercionFailure::NotAnInteger {
            text: trimmed.to_string(),
        },
    })
}

/// Reads a candidate as a signed integer.
pub fn coerce_candidate(candidate: &Candidate) -> Result<i64, CoercionFailure> {
    match candidate {
        Candidate::Integer(value) => Ok(*value),
        Candidate::Text(text) => coerce_integer(text),
    }
}
