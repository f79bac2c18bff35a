//! Template model.

use serde::{Deserialize, Serialize};

use super::field::Field;
use super::rule::{Rule, null_as_empty};

/// A named grouping of fields and the rules that gate them.
///
/// Rules reference the field they test through [`Rule::target_field`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// The template's name.
    #[serde(rename = "templateName", default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// The fields of one logical record, in definition order.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// The rules applied to records of this shape, in definition order.
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl Template {
    /// Returns the first field with the given name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns the rules that target the given field.
    pub fn rules_for<'a>(&'a self, field_name: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules
            .iter()
            .filter(move |rule| rule.target_field.as_deref() == Some(field_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FieldType, OperatorKind};

    fn order_template() -> Template {
        let json = r#"{
            "templateName": "Order",
            "fields": [
                { "fieldName": "Quantity", "fieldType": "Integer", "required": true },
                { "fieldName": "Reference", "minLength": 3, "maxLength": 8 }
            ],
            "rules": [
                {
                    "ruleName": "QuantityCap",
                    "errorMessage": "Too many",
                    "validationLogic": { "operator": "LessThan", "value": "100" },
                    "targetField": "Quantity"
                },
                {
                    "ruleName": "QuantityNotZero",
                    "errorMessage": "Zero quantity",
                    "validationLogic": { "operator": "NotEquals", "value": "0" },
                    "targetField": "Quantity"
                }
            ]
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_deserialize_template_keeps_order() {
        let template = order_template();
        assert_eq!(template.name, "Order");
        assert_eq!(template.fields.len(), 2);
        assert_eq!(template.fields[0].name, "Quantity");
        assert_eq!(template.fields[1].name, "Reference");
        assert_eq!(template.rules[0].name, "QuantityCap");
        assert_eq!(template.rules[1].name, "QuantityNotZero");
    }

    #[test]
    fn test_field_lookup() {
        let template = order_template();
        let field = template.field("Quantity").unwrap();
        assert_eq!(field.field_type, FieldType::Integer);
        assert!(template.field("Missing").is_none());
    }

    #[test]
    fn test_rules_for_field() {
        let template = order_template();
        let operators: Vec<_> = template
            .rules_for("Quantity")
            .filter_map(|rule| rule.operator())
            .collect();
        assert_eq!(
            operators,
            vec![&OperatorKind::LessThan, &OperatorKind::NotEquals]
        );
        assert_eq!(template.rules_for("Reference").count(), 0);
    }

    #[test]
    fn test_empty_template_is_lenient() {
        let template: Template = serde_json::from_str("{}").unwrap();
        assert!(template.name.is_empty());
        assert!(template.fields.is_empty());
        assert!(template.rules.is_empty());
    }
}
