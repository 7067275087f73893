//! Error types for the CTC engine.
//!
//! The salary calculation itself never fails. These errors cover the layers
//! around it: loading scheme presets and resolving the preset a caller asked for.

use thiserror::Error;

/// The main error type for the CTC engine.
///
/// # Example
///
/// ```
/// use ctc_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/presets".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/presets");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file or directory was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No preset with the requested name is loaded.
    #[error("Salary scheme not found: {name}")]
    SchemeNotFound {
        /// The scheme name that was requested.
        name: String,
    },

    /// A preset was loaded but violates a scheme constraint.
    #[error("Invalid salary scheme '{name}': {message}")]
    InvalidScheme {
        /// The name of the offending preset.
        name: String,
        /// What made the preset invalid.
        message: String,
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
            path: "/missing/basic_40.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/basic_40.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_scheme_not_found_displays_name() {
        let error = EngineError::SchemeNotFound {
            name: "basic_60".to_string(),
        };
        assert_eq!(error.to_string(), "Salary scheme not found: basic_60");
    }

    #[test]
    fn test_invalid_scheme_displays_name_and_message() {
        let error = EngineError::InvalidScheme {
            name: "broken".to_string(),
            message: "basic_ratio must be between 0 and 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid salary scheme 'broken': basic_ratio must be between 0 and 1"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_scheme_not_found() -> EngineResult<()> {
            Err(EngineError::SchemeNotFound {
                name: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_scheme_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
