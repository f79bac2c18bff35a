//! Rule model and related types.
//!
//! This module defines the [`Rule`] struct, its [`ComparisonLogic`] and the
//! closed set of [`OperatorKind`]s a rule can use.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// The comparison a rule performs.
///
/// Operator text is resolved once, when the definition is deserialized.
/// Text outside the known vocabulary is kept as [`OperatorKind::Unsupported`]
/// so the evaluator can report it as a configuration error instead of the
/// loader rejecting the whole rule set.
///
/// # Examples
///
/// ```
/// use business_validation::models::OperatorKind;
///
/// assert_eq!(OperatorKind::parse("LessThan"), OperatorKind::LessThan);
/// assert_eq!(
///     OperatorKind::parse("Between"),
///     OperatorKind::Unsupported("Between".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OperatorKind {
    /// `Equals`: the rule fails when the candidate equals the operand.
    Equals,
    /// `GreaterThan`: the candidate must be strictly greater than the operand.
    GreaterThan,
    /// `LessThan`: the candidate must be strictly less than the operand.
    LessThan,
    /// `NotEquals`: the candidate must differ from the operand.
    NotEquals,
    /// Any other operator text, kept verbatim.
    Unsupported(String),
}

impl OperatorKind {
    /// Resolves operator text. Matching is exact and case-sensitive.
    pub fn parse(text: &str) -> Self {
        match text {
            "Equals" => Self::Equals,
            "GreaterThan" => Self::GreaterThan,
            "LessThan" => Self::LessThan,
            "NotEquals" => Self::NotEquals,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// Returns the operator text as it appears in a definition.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Equals => "Equals",
            Self::GreaterThan => "GreaterThan",
            Self::LessThan => "LessThan",
            Self::NotEquals => "NotEquals",
            Self::Unsupported(text) => text,
        }
    }

    /// Returns true for the four operators the evaluator understands.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl Default for OperatorKind {
    fn default() -> Self {
        Self::Unsupported(String::new())
    }
}

impl From<String> for OperatorKind {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<OperatorKind> for String {
    fn from(operator: OperatorKind) -> Self {
        operator.as_str().to_string()
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The operator/operand pair a rule evaluates.
///
/// The operand stays textual until evaluation; a malformed operand only
/// surfaces when the rule actually fires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonLogic {
    /// The comparison to perform.
    #[serde(default)]
    pub operator: OperatorKind,
    /// The operand, parsed according to the target field's type.
    #[serde(rename = "value", default, deserialize_with = "scalar_as_text")]
    pub operand: String,
}

impl ComparisonLogic {
    /// Creates comparison logic from an operator and operand.
    pub fn new(operator: OperatorKind, operand: impl Into<String>) -> Self {
        Self {
            operator,
            operand: operand.into(),
        }
    }
}

/// A named comparison check with an associated failure message.
///
/// Every attribute is optional in a definition. A rule without
/// `validationLogic` still loads and is reported as a configuration error
/// when evaluated.
///
/// # Examples
///
/// ```
/// use business_validation::models::{ComparisonLogic, OperatorKind, Rule};
///
/// let json = r#"{
///     "ruleName": "QuantityCap",
///     "errorMessage": "Quantity must be below 10",
///     "validationLogic": { "operator": "LessThan", "value": "10" },
///     "targetField": "Quantity"
/// }"#;
///
/// let rule: Rule = serde_json::from_str(json).unwrap();
/// assert_eq!(rule.name, "QuantityCap");
/// assert_eq!(rule.operator(), Some(&OperatorKind::LessThan));
/// assert_eq!(rule.target_field.as_deref(), Some("Quantity"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// The rule's name.
    #[serde(rename = "ruleName", default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// The message reported when the rule fails.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub error_message: String,
    /// The comparison performed by the rule.
    #[serde(rename = "validationLogic", default)]
    pub logic: Option<ComparisonLogic>,
    /// The name of the field whose value the rule tests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_field: Option<String>,
}

impl Rule {
    /// Creates a rule with comparison logic and no target field.
    pub fn new(
        name: impl Into<String>,
        error_message: impl Into<String>,
        logic: ComparisonLogic,
    ) -> Self {
        Self {
            name: name.into(),
            error_message: error_message.into(),
            logic: Some(logic),
            target_field: None,
        }
    }

    /// Returns the rule with its target field set.
    pub fn with_target(mut self, field: impl Into<String>) -> Self {
        self.target_field = Some(field.into());
        self
    }

    /// Returns the rule's operator, if it has comparison logic.
    pub fn operator(&self) -> Option<&OperatorKind> {
        self.logic.as_ref().map(|logic| &logic.operator)
    }
}

/// Deserializes a nullable string, mapping `null` to an empty string.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A scalar definition value of any type.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

/// Deserializes a nullable scalar as its text. Numbers and booleans keep
/// their written form; `null` becomes an empty string.
fn scalar_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Scalar>::deserialize(deserializer)? {
        None => String::new(),
        Some(Scalar::Text(text)) => text,
        Some(Scalar::Integer(number)) => number.to_string(),
        Some(Scalar::Unsigned(number)) => number.to_string(),
        Some(Scalar::Float(number)) => number.to_string(),
        Some(Scalar::Bool(flag)) => flag.to_string(),
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_operators() {
        assert_eq!(OperatorKind::parse("Equals"), OperatorKind::Equals);
        assert_eq!(OperatorKind::parse("GreaterThan"), OperatorKind::GreaterThan);
        assert_eq!(OperatorKind::parse("LessThan"), OperatorKind::LessThan);
        assert_eq!(OperatorKind::parse("NotEquals"), OperatorKind::NotEquals);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            OperatorKind::parse("equals"),
            OperatorKind::Unsupported("equals".to_string())
        );
    }

    #[test]
    fn test_unsupported_operator_keeps_text() {
        let operator = OperatorKind::parse("Between");
        assert!(!operator.is_supported());
        assert_eq!(operator.as_str(), "Between");
        assert_eq!(operator.to_string(), "Between");
    }

    #[test]
    fn test_deserialize_full_rule() {
        let json = r#"{
            "ruleName": "MinimumAge",
            "errorMessage": "Applicant must be older than 17",
            "validationLogic": { "operator": "GreaterThan", "value": "17" },
            "targetField": "Age"
        }"#;

        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.name, "MinimumAge");
        assert_eq!(rule.error_message, "Applicant must be older than 17");
        assert_eq!(
            rule.logic,
            Some(ComparisonLogic::new(OperatorKind::GreaterThan, "17"))
        );
        assert_eq!(rule.target_field.as_deref(), Some("Age"));
    }

    #[test]
    fn test_deserialize_partial_rule_is_lenient() {
        let rule: Rule = serde_json::from_str(r#"{ "ruleName": "Orphan" }"#).unwrap();
        assert_eq!(rule.name, "Orphan");
        assert!(rule.error_message.is_empty());
        assert!(rule.logic.is_none());
        assert!(rule.target_field.is_none());
    }

    #[test]
    fn test_deserialize_null_strings_as_empty() {
        let json = r#"{
            "ruleName": null,
            "errorMessage": null,
            "validationLogic": { "operator": "Equals", "value": null }
        }"#;

        let rule: Rule = serde_json::from_str(json).unwrap();
        assert!(rule.name.is_empty());
        assert!(rule.error_message.is_empty());
        assert_eq!(rule.logic.unwrap().operand, "");
    }

    #[test]
    fn test_numeric_operand_loads_as_text() {
        let logic: ComparisonLogic =
            serde_json::from_str(r#"{ "operator": "LessThan", "value": 10 }"#).unwrap();
        assert_eq!(logic, ComparisonLogic::new(OperatorKind::LessThan, "10"));

        let logic: ComparisonLogic =
            serde_json::from_str(r#"{ "operator": "GreaterThan", "value": -3 }"#).unwrap();
        assert_eq!(logic.operand, "-3");
    }

    #[test]
    fn test_unquoted_yaml_operand_loads_as_text() {
        let logic: ComparisonLogic =
            serde_yaml::from_str("operator: Equals\nvalue: 13\n").unwrap();
        assert_eq!(logic, ComparisonLogic::new(OperatorKind::Equals, "13"));
    }

    #[test]
    fn test_fractional_and_boolean_operands_keep_written_form() {
        let logic: ComparisonLogic =
            serde_json::from_str(r#"{ "operator": "Equals", "value": 2.5 }"#).unwrap();
        assert_eq!(logic.operand, "2.5");

        let logic: ComparisonLogic =
            serde_json::from_str(r#"{ "operator": "Equals", "value": true }"#).unwrap();
        assert_eq!(logic.operand, "true");
    }

    #[test]
    fn test_missing_operator_is_unsupported() {
        let logic: ComparisonLogic = serde_json::from_str(r#"{ "value": "3" }"#).unwrap();
        assert_eq!(logic.operator, OperatorKind::Unsupported(String::new()));
    }

    #[test]
    fn test_unknown_operator_loads() {
        let json = r#"{ "operator": "Between", "value": "1..5" }"#;
        let logic: ComparisonLogic = serde_json::from_str(json).unwrap();
        assert_eq!(
            logic.operator,
            OperatorKind::Unsupported("Between".to_string())
        );
    }

    #[test]
    fn test_serialize_uses_definition_keys() {
        let rule = Rule::new(
            "Cap",
            "Too many",
            ComparisonLogic::new(OperatorKind::LessThan, "10"),
        );
        let value = serde_json::to_value(&rule).unwrap();

        assert_eq!(value["ruleName"], "Cap");
        assert_eq!(value["errorMessage"], "Too many");
        assert_eq!(value["validationLogic"]["operator"], "LessThan");
        assert_eq!(value["validationLogic"]["value"], "10");
        assert!(value.get("targetField").is_none());
    }

    #[test]
    fn test_with_target_sets_field() {
        let rule = Rule::new(
            "Cap",
            "Too many",
            ComparisonLogic::new(OperatorKind::LessThan, "10"),
        )
        .with_target("Quantity");
        assert_eq!(rule.target_field.as_deref(), Some("Quantity"));
        assert_eq!(rule.operator(), Some(&OperatorKind::LessThan));
    }
}
