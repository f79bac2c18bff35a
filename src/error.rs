//! Error types for the Business Validation Engine.
//!
//! Only load-time and lookup failures are errors. Problems found while
//! evaluating a rule are reported as [`Verdict`](crate::models::Verdict)
//! variants instead, so a bad rule never aborts its siblings.

use thiserror::Error;

/// The main error type for the Business Validation Engine.
///
/// # Example
///
/// ```
/// use business_validation::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/business.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/business.json");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The rule-set definition was not found or could not be read.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The rule-set definition could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path (or source label) that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The definition file has an extension the loader does not understand.
    #[error("Unsupported configuration format: {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat {
        /// The offending path.
        path: String,
    },

    /// No template with the requested name exists in the loaded rule set.
    #[error("Template not found: {name}")]
    TemplateNotFound {
        /// The template name that was requested.
        name: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/business.json".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/business.json"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.json".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.json': expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_unsupported_format_displays_path() {
        let error = EngineError::UnsupportedFormat {
            path: "rules.toml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unsupported configuration format: rules.toml (expected .json, .yaml or .yml)"
        );
    }

    #[test]
    fn test_template_not_found_displays_name() {
        let error = EngineError::TemplateNotFound {
            name: "invoice".to_string(),
        };
        assert_eq!(error.to_string(), "Template not found: invoice");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_template_not_found() -> EngineResult<()> {
            Err(EngineError::TemplateNotFound {
                name: "unknown".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_template_not_found()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::TemplateNotFound { .. })
        ));
    }
}
