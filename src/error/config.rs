//! Configuration and message bundle errors.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid or unreadable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable or flag holds a value that does not parse.
    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    /// A flag that expects a value was last on the command line.
    #[error("missing value for {0}")]
    MissingValue(String),

    /// A file or directory named by the configuration could not be read.
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub fn invalid(name: &str, value: &str, reason: impl ToString) -> Self {
        ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ConfigError::InvalidValue { name, value, .. } => {
                format!("'{}' is not a valid value for {}.", value, name)
            }
            ConfigError::MissingValue(name) => format!("{} needs a value.", name),
            ConfigError::Unreadable { path, .. } => {
                format!("Could not read {}. Check that it exists and is readable.", path.display())
            }
        }
    }
}

/// A message bundle that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BundleError {
    /// A `\u` escape that is not followed by four hex digits.
    #[error("malformed \\u escape on line {line}")]
    MalformedEscape { line: usize },
}
