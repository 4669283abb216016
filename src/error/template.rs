//! Template parsing errors.

use thiserror::Error;

/// A template that could not be parsed or located.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `{{` without its closing `}}`.
    #[error("unclosed tag starting at byte {offset} in template '{template}'")]
    UnclosedTag { template: String, offset: usize },

    /// A `{{/name}}` that does not match the open section.
    #[error("section '{found}' closed while '{expected}' is open in template '{template}'")]
    MismatchedSection {
        template: String,
        expected: String,
        found: String,
    },

    /// A `{{/name}}` with no open section.
    #[error("unexpected close of section '{name}' in template '{template}'")]
    UnexpectedClose { template: String, name: String },

    /// A section still open at the end of the template.
    #[error("section '{name}' is never closed in template '{template}'")]
    UnclosedSection { template: String, name: String },

    /// A tag with nothing inside it.
    #[error("empty tag at byte {offset} in template '{template}'")]
    EmptyTag { template: String, offset: usize },

    /// No template registered under the requested name.
    #[error("template '{0}' not found")]
    NotFound(String),
}

impl TemplateError {
    pub fn error_code(&self) -> &'static str {
        match self {
            TemplateError::NotFound(_) => "TEMPLATE_NOT_FOUND",
            _ => "TEMPLATE_SYNTAX",
        }
    }
}
