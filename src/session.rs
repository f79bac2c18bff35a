//! Validation sessions.
//!
//! A session holds a read-only snapshot of a loaded rule set. Clones share
//! the snapshot, so records can be validated from many threads at once.
//! Reloading replaces the snapshot wholesale; holders of the previous one
//! keep seeing it unchanged.

use std::sync::Arc;

use crate::config::{ConfigLoader, RuleSet};
use crate::error::{EngineError, EngineResult};
use crate::evaluation::{evaluate_rules, validate_record};
use crate::models::{Candidate, Record, RuleOutcome, ValidationReport};

/// A shared snapshot of a loaded rule set.
#[derive(Debug, Clone)]
pub struct ValidationSession {
    rule_set: Arc<RuleSet>,
}

impl ValidationSession {
    /// Creates a session over the given rule set.
    pub fn new(rule_set: RuleSet) -> Self {
        Self {
            rule_set: Arc::new(rule_set),
        }
    }

    /// Creates a session over the rule set a loader produced.
    pub fn from_loader(loader: ConfigLoader) -> Self {
        Self::new(loader.into_rule_set())
    }

    /// Returns the current rule set.
    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Returns a handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<RuleSet> {
        Arc::clone(&self.rule_set)
    }

    /// Replaces the snapshot with a newly loaded rule set.
    pub fn replace(&mut self, rule_set: RuleSet) {
        self.rule_set = Arc::new(rule_set);
    }

    /// Validates a record against the named template.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use business_validation::config::ConfigLoader;
    /// use business_validation::models::Record;
    /// use business_validation::session::ValidationSession;
    ///
    /// let session = ValidationSession::from_loader(ConfigLoader::load("./config/templates.yaml")?);
    /// let record = Record::new().with("Customer", "ACME01").with("Quantity", "12");
    /// let report = session.validate("PurchaseOrder", &record)?;
    /// println!("valid: {}", report.is_valid());
    /// # Ok::<(), business_validation::error::EngineError>(())
    /// ```
    pub fn validate(&self, template_name: &str, record: &Record) -> EngineResult<ValidationReport> {
        let template =
            self.rule_set
                .template(template_name)
                .ok_or_else(|| EngineError::TemplateNotFound {
                    name: template_name.to_string(),
                })?;
        Ok(validate_record(template, record))
    }

    /// Evaluates the top-level rules against a single candidate.
    pub fn evaluate_rules(&self, candidate: &Candidate) -> Vec<RuleOutcome> {
        evaluate_rules(self.rule_set.rules(), candidate)
    }
}
