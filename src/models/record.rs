//! Submitted records and the candidate values rules are evaluated against.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::{Binding, Field};

/// The value a rule is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Candidate {
    /// An already numeric value.
    Integer(i64),
    /// Text taken from a record, coerced at evaluation time.
    Text(String),
}

impl From<i64> for Candidate {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Candidate {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// A submitted data record: field name to text value.
///
/// # Examples
///
/// ```
/// use business_validation::models::Record;
///
/// let record: Record = serde_json::from_str(r#"{ "Quantity": "12" }"#).unwrap();
/// assert_eq!(record.get("Quantity"), Some("12"));
/// assert_eq!(record.get("Missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: BTreeMap<String, String>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record with an entry added.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets an entry, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Resolves a field's value through its binding.
    pub fn resolve<'a>(&'a self, field: &'a Field) -> Option<&'a str> {
        match field.binding() {
            Binding::Record(key) => self.get(key),
            Binding::Literal(text) => Some(text),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldType;

    #[test]
    fn test_candidate_conversions() {
        assert_eq!(Candidate::from(5), Candidate::Integer(5));
        assert_eq!(Candidate::from("5"), Candidate::Text("5".to_string()));
        assert_eq!(Candidate::from(7).to_string(), "7");
    }

    #[test]
    fn test_candidate_deserializes_number_or_text() {
        let number: Candidate = serde_json::from_str("42").unwrap();
        let text: Candidate = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(number, Candidate::Integer(42));
        assert_eq!(text, Candidate::Text("42".to_string()));
    }

    #[test]
    fn test_record_builder_and_lookup() {
        let record = Record::new().with("A", "1").with("B", "two");
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("A"), Some("1"));
        assert_eq!(record.get("B"), Some("two"));
    }

    #[test]
    fn test_record_from_iterator() {
        let record: Record = [("Quantity", "3")].into_iter().collect();
        assert_eq!(record.get("Quantity"), Some("3"));
    }

    #[test]
    fn test_resolve_follows_binding() {
        let record = Record::new().with("Customer", "ACME01").with("Code", "X");

        let mut bound = Field::new("Code", FieldType::String);
        bound.value = "{$Customer}".to_string();
        assert_eq!(record.resolve(&bound), Some("ACME01"));

        let by_name = Field::new("Code", FieldType::String);
        assert_eq!(record.resolve(&by_name), Some("X"));

        let mut literal = Field::new("Currency", FieldType::String);
        literal.value = "AUD".to_string();
        assert_eq!(record.resolve(&literal), Some("AUD"));

        let missing = Field::new("Absent", FieldType::String);
        assert_eq!(record.resolve(&missing), None);
    }
}
