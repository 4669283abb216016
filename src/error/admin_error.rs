//! Unified error type for the admin console.

use thiserror::Error;

use super::backend::BackendError;
use super::config::{BundleError, ConfigError};
use super::template::TemplateError;

/// Everything that can stop the console from starting or a command from
/// being understood. Backend failures during view actions are not returned
/// through this type; views route them to the user directly.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bundle(#[from] BundleError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A console command that could not be parsed.
    #[error("{0}")]
    Command(String),
}

impl AdminError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AdminError::Backend(err) => err.user_message(),
            AdminError::Config(err) => err.user_message(),
            AdminError::Command(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::Backend(err) => err.error_code(),
            AdminError::Template(err) => err.error_code(),
            AdminError::Config(_) => "CONFIG_INVALID",
            AdminError::Bundle(_) => "BUNDLE_INVALID",
            AdminError::Io(_) => "IO_ERROR",
            AdminError::Command(_) => "COMMAND_INVALID",
        }
    }
}

/// Result alias used across the crate.
pub type AdminResult<T> = Result<T, AdminError>;
