//! Rule evaluation.
//!
//! This module decides whether a single candidate value satisfies a single
//! rule's comparison logic. Evaluation is a pure function of the rule and
//! the candidate: nothing is logged or written, and every problem comes
//! back as a classified [`Verdict`].

use crate::models::{Candidate, OperatorKind, Rule, RuleOutcome, Verdict};

use super::coercion::{coerce_candidate, coerce_integer};

/// Evaluates one rule against one candidate value.
///
/// Operand and candidate are both coerced to integers. The operators behave
/// as follows:
///
/// | Operator      | Outcome                                                      |
/// |---------------|--------------------------------------------------------------|
/// | `Equals`      | `Fail` when candidate == operand, otherwise `Pass`           |
/// | `GreaterThan` | `Pass` when candidate > operand, otherwise `Rejected`        |
/// | `LessThan`    | `Pass` when <, `Fail` when >, `Rejected` when equal          |
/// | `NotEquals`   | `Pass` when candidate != operand, otherwise `Rejected`       |
///
/// `Equals` is inverted: it fails on equality. `LessThan` only produces a
/// message when the candidate is too large; an equal candidate is a bare
/// `Rejected`. Both behaviours are kept as-is so existing rule sets keep
/// their meaning, and consumers must not treat `Rejected` and `Fail` as the
/// same outcome if they need exact parity.
///
/// A missing comparison logic or an unsupported operator yields
/// `ConfigError`. An operand or candidate that is not an integer yields
/// `CoercionError`.
///
/// # Examples
///
/// ```
/// use business_validation::evaluation::evaluate;
/// use business_validation::models::{Candidate, ComparisonLogic, OperatorKind, Rule, Verdict};
///
/// let rule = Rule::new(
///     "QuantityCap",
///     "Quantity must be below 10",
///     ComparisonLogic::new(OperatorKind::LessThan, "10"),
/// );
///
/// assert_eq!(evaluate(&rule, &Candidate::from(5)), Verdict::Pass);
/// assert!(matches!(evaluate(&rule, &Candidate::from(15)), Verdict::Fail { .. }));
/// assert_eq!(evaluate(&rule, &Candidate::from(10)), Verdict::Rejected);
/// ```
pub fn evaluate(rule: &Rule, candidate: &Candidate) -> Verdict {
    let Some(logic) = rule.logic.as_ref() else {
        return Verdict::ConfigError {
            reason: format!("rule '{}' has no validation logic", rule.name),
        };
    };

    if let OperatorKind::Unsupported(text) = &logic.operator {
        return unsupported(rule, text);
    }

    let operand = match coerce_integer(&logic.operand) {
        Ok(operand) => operand,
        Err(err) => {
            return Verdict::CoercionError {
                reason: format!("rule '{}' operand: {}", rule.name, err),
            };
        }
    };

    let value = match coerce_candidate(candidate) {
        Ok(value) => value,
        Err(err) => {
            return Verdict::CoercionError {
                reason: format!("rule '{}' candidate: {}", rule.name, err),
            };
        }
    };

    match &logic.operator {
        OperatorKind::Equals => {
            if value == operand {
                fail(rule, format!("Equals {}", logic.operand.trim()))
            } else {
                Verdict::Pass
            }
        }
        OperatorKind::GreaterThan => pass_or_reject(value > operand),
        OperatorKind::LessThan => {
            if value > operand {
                fail(rule, format!("Is Less than {}", logic.operand.trim()))
            } else {
                pass_or_reject(value < operand)
            }
        }
        OperatorKind::NotEquals => pass_or_reject(value != operand),
        OperatorKind::Unsupported(text) => unsupported(rule, text),
    }
}

/// Evaluates every rule against the same candidate, in order.
///
/// This is how a bare rule list (one with no fields to resolve values from)
/// is applied.
pub fn evaluate_rules(rules: &[Rule], candidate: &Candidate) -> Vec<RuleOutcome> {
    rules
        .iter()
        .map(|rule| RuleOutcome {
            rule_name: rule.name.clone(),
            target_field: rule.target_field.clone(),
            verdict: evaluate(rule, candidate),
        })
        .collect()
}

fn pass_or_reject(passed: bool) -> Verdict {
    if passed {
        Verdict::Pass
    } else {
        Verdict::Rejected
    }
}

fn unsupported(rule: &Rule, operator: &str) -> Verdict {
    Verdict::ConfigError {
        reason: format!(
            "rule '{}' uses unsupported operator '{}'",
            rule.name, operator
        ),
    }
}

fn fail(rule: &Rule, diagnostic: String) -> Verdict {
    let message = if rule.error_message.is_empty() {
        diagnostic
    } else {
        format!("{} ({})", rule.error_message, diagnostic)
    };
    Verdict::Fail { message }
}
