//! Configuration types for rule-set definitions.
//!
//! This module contains the document shapes accepted from definition files
//! and the [`RuleSet`] aggregate a load produces.

use serde::{Deserialize, Serialize};

use crate::models::{Rule, Template};

/// The accepted shapes of a rule-set definition document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentShape {
    /// A bare, ordered list of rule entries.
    Rules,
    /// An object with a `templates` list.
    Templates,
    /// A single template object, recognised by its `templateName` key.
    Template,
}

impl DocumentShape {
    /// Classifies a parsed JSON document.
    pub(crate) fn of_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Array(_) => Some(Self::Rules),
            serde_json::Value::Object(map) => {
                Self::of_object(map.contains_key("templates"), map.contains_key("templateName"))
            }
            _ => None,
        }
    }

    /// Classifies a parsed YAML document.
    pub(crate) fn of_yaml(value: &serde_yaml::Value) -> Option<Self> {
        match value {
            serde_yaml::Value::Sequence(_) => Some(Self::Rules),
            serde_yaml::Value::Mapping(map) => {
                Self::of_object(map.contains_key("templates"), map.contains_key("templateName"))
            }
            _ => None,
        }
    }

    fn of_object(has_templates: bool, has_template_name: bool) -> Option<Self> {
        if has_templates {
            Some(Self::Templates)
        } else if has_template_name {
            Some(Self::Template)
        } else {
            None
        }
    }
}

/// The body of a [`DocumentShape::Templates`] document.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TemplateList {
    pub(crate) templates: Vec<Template>,
}

/// A definition document deserialized into its concrete shape.
#[derive(Debug, Clone)]
pub(crate) enum RuleSetDocument {
    Rules(Vec<Rule>),
    Templates(Vec<Template>),
    Template(Template),
}

impl RuleSetDocument {
    /// Builds the rule set this document describes.
    pub(crate) fn into_rule_set(self) -> RuleSet {
        match self {
            RuleSetDocument::Rules(rules) => RuleSet::new(rules, Vec::new()),
            RuleSetDocument::Templates(templates) => RuleSet::new(Vec::new(), templates),
            RuleSetDocument::Template(template) => RuleSet::new(Vec::new(), vec![template]),
        }
    }
}

impl From<TemplateList> for RuleSetDocument {
    fn from(list: TemplateList) -> Self {
        RuleSetDocument::Templates(list.templates)
    }
}

/// Everything a single definition load produced.
///
/// A rule set is never patched: reloading produces a new instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Top-level rules from a bare rule list, in definition order.
    rules: Vec<Rule>,
    /// Templates, in definition order.
    templates: Vec<Template>,
}

impl RuleSet {
    /// Creates a rule set from its component parts.
    pub fn new(rules: Vec<Rule>, templates: Vec<Template>) -> Self {
        Self { rules, templates }
    }

    /// Returns the top-level rules.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the templates.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Returns the first template with the given name.
    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|template| template.name == name)
    }

    /// Total number of rules, top-level and in templates.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
            + self
                .templates
                .iter()
                .map(|template| template.rules.len())
                .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shapes() {
        let shape = |text: &str| DocumentShape::of_json(&serde_json::from_str(text).unwrap());

        assert_eq!(shape("[]"), Some(DocumentShape::Rules));
        assert_eq!(shape(r#"{ "templates": [] }"#), Some(DocumentShape::Templates));
        assert_eq!(shape(r#"{ "templateName": "Order" }"#), Some(DocumentShape::Template));
        assert_eq!(shape(r#"{ "ruleName": "Cap" }"#), None);
        assert_eq!(shape(r#"{ "templatName": "Typo", "feilds": [] }"#), None);
        assert_eq!(shape("42"), None);
    }

    #[test]
    fn test_yaml_shapes() {
        let shape = |text: &str| DocumentShape::of_yaml(&serde_yaml::from_str(text).unwrap());

        assert_eq!(shape("- ruleName: Cap\n"), Some(DocumentShape::Rules));
        assert_eq!(shape("templates: []\n"), Some(DocumentShape::Templates));
        assert_eq!(shape("templateName: Order\n"), Some(DocumentShape::Template));
        assert_eq!(shape("ruleName: Cap\n"), None);
        assert_eq!(shape("just text\n"), None);
    }

    #[test]
    fn test_rule_count_includes_template_rules() {
        let template: Template = serde_json::from_str(
            r#"{ "templateName": "Order", "rules": [ { "ruleName": "A" }, { "ruleName": "B" } ] }"#,
        )
        .unwrap();
        let rule_set = RuleSetDocument::Template(template).into_rule_set();
        assert_eq!(rule_set.rule_count(), 2);
        assert!(rule_set.template("Order").is_some());
    }
}
