//! Validation of a whole record against a template.
//!
//! Every field of the template is resolved from the record and checked,
//! then every rule is evaluated against the value of the field it targets.
//! A rule that cannot be evaluated is reported in place and never stops
//! its siblings.

use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::{
    Candidate, FieldOutcome, Record, Rule, RuleOutcome, Template, ValidationReport, Verdict,
};

use super::evaluator::evaluate;
use super::field_checks::check_field;

/// Validates a record against a template.
///
/// # Rule targets
///
/// Each rule is evaluated against the resolved value of its
/// [`target_field`](Rule::target_field):
///
/// - no target field, or a target not in the template: `ConfigError`
/// - target field with no value in the record: `CoercionError`
///
/// # Examples
///
/// ```
/// use business_validation::evaluation::validate_record;
/// use business_validation::models::{
///     ComparisonLogic, Field, FieldType, OperatorKind, Record, Rule, Template,
/// };
///
/// let template = Template {
///     name: "Order".to_string(),
///     fields: vec![Field::new("Quantity", FieldType::Integer)],
///     rules: vec![
///         Rule::new(
///             "QuantityCap",
///             "Quantity must be below 100",
///             ComparisonLogic::new(OperatorKind::LessThan, "100"),
///         )
///         .with_target("Quantity"),
///     ],
/// };
///
/// let report = validate_record(&template, &Record::new().with("Quantity", "12"));
/// assert!(report.is_valid());
///
/// let report = validate_record(&template, &Record::new().with("Quantity", "250"));
/// assert_eq!(report.failures().count(), 1);
/// ```
pub fn validate_record(template: &Template, record: &Record) -> ValidationReport {
    let fields: Vec<FieldOutcome> = template
        .fields
        .iter()
        .map(|field| {
            let value = record.resolve(field);
            FieldOutcome {
                field_name: field.name.clone(),
                value: value.map(str::to_string),
                violations: check_field(field, value),
            }
        })
        .collect();

    let rules: Vec<RuleOutcome> = template
        .rules
        .iter()
        .map(|rule| RuleOutcome {
            rule_name: rule.name.clone(),
            target_field: rule.target_field.clone(),
            verdict: evaluate_in_template(rule, template, record),
        })
        .collect();

    for outcome in rules.iter().filter(|o| o.verdict.is_configuration_problem()) {
        warn!(
            template = %template.name,
            rule = %outcome.rule_name,
            reason = outcome.verdict.message().unwrap_or_default(),
            "Rule could not be evaluated"
        );
    }

    let report = ValidationReport {
        report_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        template_name: template.name.clone(),
        fields,
        rules,
    };

    debug!(
        report_id = %report.report_id,
        template = %template.name,
        fields_checked = report.fields.len(),
        rules_evaluated = report.rules.len(),
        failures = report.failures().count(),
        valid = report.is_valid(),
        "Record validated"
    );

    report
}

/// Resolves a rule's candidate from the record and evaluates it.
fn evaluate_in_template(rule: &Rule, template: &Template, record: &Record) -> Verdict {
    let Some(target) = rule.target_field.as_deref() else {
        return Verdict::ConfigError {
            reason: format!("rule '{}' does not name a target field", rule.name),
        };
    };

    let Some(field) = template.field(target) else {
        return Verdict::ConfigError {
            reason: format!(
                "rule '{}' targets unknown field '{}' in template '{}'",
                rule.name, target, template.name
            ),
        };
    };

    match record.resolve(field) {
        Some(value) => evaluate(rule, &Candidate::from(value)),
        None => Verdict::CoercionError {
            reason: format!(
                "rule '{}' candidate: field '{}' has no value",
                rule.name, target
            ),
        },
    }
}
