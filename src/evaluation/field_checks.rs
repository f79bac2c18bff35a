//! Field constraint checks.
//!
//! Checks the required flag, length bounds and declared type of a
//! [`Field`] against the value it resolved to.

use crate::models::{Field, FieldType, FieldViolation};

use super::coercion::coerce_integer;

/// Checks a resolved value against a field's constraints.
///
/// Negative or inverted bounds on a length-bounded field are reported as
/// [`FieldViolation::InvalidBounds`] and the length checks are skipped. An
/// absent or empty value only violates anything when the field is required.
/// A zero bound is treated as unset.
///
/// # Examples
///
/// ```
/// use business_validation::evaluation::check_field;
/// use business_validation::models::{Field, FieldType, FieldViolation};
///
/// let mut field = Field::new("Code", FieldType::String);
/// field.required = true;
/// field.max_length = 4;
///
/// assert_eq!(check_field(&field, None), vec![FieldViolation::MissingRequired]);
/// assert_eq!(
///     check_field(&field, Some("ABCDE")),
///     vec![FieldViolation::TooLong { max: 4, actual: 5 }]
/// );
/// assert!(check_field(&field, Some("ABC")).is_empty());
/// ```
pub fn check_field(field: &Field, value: Option<&str>) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    let bounds = length_bounds(field);
    if field.is_length_bounded() && bounds.is_none() {
        violations.push(FieldViolation::InvalidBounds {
            min: field.min_length,
            max: field.max_length,
        });
    }

    let value = match value {
        Some(value) if !value.is_empty() => value,
        _ => {
            if field.required {
                violations.push(FieldViolation::MissingRequired);
            }
            return violations;
        }
    };

    match (&field.field_type, bounds) {
        (FieldType::String, Some((min, max))) => {
            let actual = value.chars().count();
            if min > 0 && actual < min {
                violations.push(FieldViolation::TooShort { min, actual });
            }
            if max > 0 && actual > max {
                violations.push(FieldViolation::TooLong { max, actual });
            }
        }
        (FieldType::Integer, _) => {
            if coerce_integer(value).is_err() {
                violations.push(FieldViolation::NotAnInteger {
                    value: value.to_string(),
                });
            }
        }
        (FieldType::String, None) | (FieldType::Other(_), _) => {}
    }

    violations
}

/// Returns the `(min, max)` length bounds, or `None` when they are negative
/// or inverted. Zero means unset and never inverts.
fn length_bounds(field: &Field) -> Option<(usize, usize)> {
    let min = usize::try_from(field.min_length).ok()?;
    let max = usize::try_from(field.max_length).ok()?;
    if min > 0 && max > 0 && min > max {
        return None;
    }
    Some((min, max))
}
