//! Field model and related types.
//!
//! A [`Field`] describes one typed slot of a data record together with the
//! constraints that apply to it.

use serde::{Deserialize, Serialize};

use super::rule::null_as_empty;

/// The declared type of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// Free text, bounded by `min_length`/`max_length`.
    #[default]
    String,
    /// A whole number.
    Integer,
    /// Any other declared type. Only the required check applies.
    Other(String),
}

impl FieldType {
    /// Resolves a type name, ignoring case. `Int` and `Number` alias `Integer`.
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "" | "string" | "text" => Self::String,
            "integer" | "int" | "number" => Self::Integer,
            _ => Self::Other(text.to_string()),
        }
    }

    /// Returns the type name as written in a definition.
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Other(text) => text,
        }
    }
}

impl From<String> for FieldType {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.as_str().to_string()
    }
}

/// Where a field sits in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationHints {
    /// Horizontal location expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,
    /// Vertical location expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ypath: Option<String>,
}

/// How a field obtains its value from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding<'a> {
    /// Read the record entry with this key.
    Record(&'a str),
    /// Use this literal text.
    Literal(&'a str),
}

/// A typed slot in a data record with its validation constraints.
///
/// # Examples
///
/// ```
/// use business_validation::models::{Binding, Field, FieldType};
///
/// let json = r#"{
///     "fieldName": "CustomerCode",
///     "fieldType": "String",
///     "required": true,
///     "minLength": 5,
///     "maxLength": 10,
///     "value": "{$Customer}",
///     "xpath": "/order/customer",
///     "ypath": "2"
/// }"#;
///
/// let field: Field = serde_json::from_str(json).unwrap();
/// assert_eq!(field.field_type, FieldType::String);
/// assert_eq!(field.binding(), Binding::Record("Customer"));
/// assert_eq!(field.location.xpath.as_deref(), Some("/order/customer"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// The field's name.
    #[serde(rename = "fieldName", default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// The declared type.
    #[serde(default)]
    pub field_type: FieldType,
    /// Whether a non-empty value must be present.
    #[serde(default)]
    pub required: bool,
    /// Minimum length in characters; zero means unset.
    ///
    /// Signed so a negative bound still loads; [`check_field`] reports it.
    ///
    /// [`check_field`]: crate::evaluation::check_field
    #[serde(default)]
    pub min_length: i64,
    /// Maximum length in characters; zero means unset.
    #[serde(default)]
    pub max_length: i64,
    /// Binding expression: `{$Key}`, a literal, or empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
    /// Location hints in the source document.
    #[serde(flatten)]
    pub location: LocationHints,
}

impl Field {
    /// Creates a field of the given type with no constraints.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            ..Self::default()
        }
    }

    /// Returns true if the field's type carries length bounds.
    pub fn is_length_bounded(&self) -> bool {
        self.field_type == FieldType::String
    }

    /// Returns how the field's value is obtained.
    ///
    /// `{$Key}` reads record entry `Key`, an empty value reads the entry
    /// named after the field, and anything else is a literal.
    pub fn binding(&self) -> Binding<'_> {
        let value = self.value.trim();
        if value.is_empty() {
            return Binding::Record(&self.name);
        }
        match value
            .strip_prefix("{$")
            .and_then(|rest| rest.strip_suffix('}'))
        {
            Some(key) => Binding::Record(key.trim()),
            None => Binding::Literal(value),
        }
    }
}
