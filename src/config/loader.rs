//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rule-set
//! definitions from JSON or YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{Rule, Template};

use super::types::{DocumentShape, RuleSet, RuleSetDocument, TemplateList};

/// The definition formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Loads and provides access to a rule-set definition.
///
/// # Document Shapes
///
/// A definition file holds one of:
/// ```text
/// [ { "ruleName": ..., "errorMessage": ..., "validationLogic": {...} }, ... ]
/// { "templateName": ..., "fields": [...], "rules": [...] }
/// { "templates": [ { "templateName": ... }, ... ] }
/// ```
///
/// An object is a template list when it has a `templates` key and a single
/// template when it has a `templateName` key. Any other document is a
/// parse error. Every entry is kept, in definition order.
///
/// # Example
///
/// ```no_run
/// use business_validation::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/business.json").unwrap();
/// for rule in loader.rules() {
///     println!("{}: {}", rule.name, rule.error_message);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLoader {
    rule_set: RuleSet,
}

impl ConfigLoader {
    /// Loads a rule-set definition from a file.
    ///
    /// The format is chosen by extension: `.json`, `.yaml` or `.yml`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The extension is not recognised (`UnsupportedFormat`)
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The content is malformed or not an accepted shape (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use business_validation::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/templates.yaml")?;
    /// # Ok::<(), business_validation::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let format = Format::from_path(path).ok_or_else(|| EngineError::UnsupportedFormat {
            path: path_str.clone(),
        })?;

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let document = match format {
            Format::Json => Self::parse_json(&content, &path_str)?,
            Format::Yaml => Self::parse_yaml(&content, &path_str)?,
        };

        Ok(Self::from_document(document, &path_str))
    }

    /// Parses a JSON definition held in memory.
    ///
    /// `source` labels the text in error messages.
    pub fn from_json_str(content: &str, source: &str) -> EngineResult<Self> {
        let document = Self::parse_json(content, source)?;
        Ok(Self::from_document(document, source))
    }

    /// Parses a YAML definition held in memory.
    ///
    /// `source` labels the text in error messages.
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<Self> {
        let document = Self::parse_yaml(content, source)?;
        Ok(Self::from_document(document, source))
    }

    fn parse_json(content: &str, source: &str) -> EngineResult<RuleSetDocument> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| parse_error(source, e))?;
        let document = match DocumentShape::of_json(&value) {
            Some(DocumentShape::Rules) => serde_json::from_str(content).map(RuleSetDocument::Rules),
            Some(DocumentShape::Templates) => {
                serde_json::from_str::<TemplateList>(content).map(RuleSetDocument::from)
            }
            Some(DocumentShape::Template) => {
                serde_json::from_str(content).map(RuleSetDocument::Template)
            }
            None => return Err(unrecognised_shape(source)),
        };
        document.map_err(|e| parse_error(source, e))
    }

    fn parse_yaml(content: &str, source: &str) -> EngineResult<RuleSetDocument> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| parse_error(source, e))?;
        let document = match DocumentShape::of_yaml(&value) {
            Some(DocumentShape::Rules) => serde_yaml::from_str(content).map(RuleSetDocument::Rules),
            Some(DocumentShape::Templates) => {
                serde_yaml::from_str::<TemplateList>(content).map(RuleSetDocument::from)
            }
            Some(DocumentShape::Template) => {
                serde_yaml::from_str(content).map(RuleSetDocument::Template)
            }
            None => return Err(unrecognised_shape(source)),
        };
        document.map_err(|e| parse_error(source, e))
    }

    fn from_document(document: RuleSetDocument, source: &str) -> Self {
        let rule_set = document.into_rule_set();
        info!(
            source = %source,
            templates = rule_set.templates().len(),
            rules = rule_set.rule_count(),
            "Loaded rule set"
        );
        Self { rule_set }
    }

    /// Returns the loaded rule set.
    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Consumes the loader, returning the rule set.
    pub fn into_rule_set(self) -> RuleSet {
        self.rule_set
    }

    /// Returns the top-level rules.
    pub fn rules(&self) -> &[Rule] {
        self.rule_set.rules()
    }

    /// Returns the templates.
    pub fn templates(&self) -> &[Template] {
        self.rule_set.templates()
    }

    /// Gets a template by its name.
    ///
    /// # Returns
    ///
    /// Returns the template if found, or `TemplateNotFound` error.
    pub fn get_template(&self, name: &str) -> EngineResult<&Template> {
        self.rule_set
            .template(name)
            .ok_or_else(|| EngineError::TemplateNotFound {
                name: name.to_string(),
            })
    }
}

fn parse_error(source: &str, error: impl std::fmt::Display) -> EngineError {
    EngineError::ConfigParseError {
        path: source.to_string(),
        message: error.to_string(),
    }
}

fn unrecognised_shape(source: &str) -> EngineError {
    EngineError::ConfigParseError {
        path: source.to_string(),
        message: "expected a list of rules, a template with `templateName`, \
                  or an object with `templates`"
            .to_string(),
    }
}
