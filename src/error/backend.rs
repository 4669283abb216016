//! Errors raised by folder resource calls.
//!
//! Every variant carries enough text to show the user what the backend (or
//! the transport) said, mirroring the `responseText || statusText` fallback
//! the admin panel has always used.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure of a single backend call against a folder resource.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// The server answered with a non-2xx status.
    #[error("backend rejected request ({status} {status_text}): {body}")]
    Rejected {
        status: u16,
        status_text: String,
        body: String,
    },

    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(HttpError),

    /// A 2xx response whose body could not be decoded.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },
}

impl BackendError {
    pub fn rejected(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        BackendError::Rejected {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// The human-readable body returned by the server, if any.
    pub fn response_text(&self) -> Option<&str> {
        match self {
            BackendError::Rejected { body, .. } if !body.trim().is_empty() => Some(body.as_str()),
            _ => None,
        }
    }

    /// Generic status description used when there is no response text.
    pub fn status_text(&self) -> String {
        match self {
            BackendError::Rejected {
                status,
                status_text,
                ..
            } => {
                if status_text.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    status_text.clone()
                }
            }
            BackendError::Transport(err) => err.to_string(),
            BackendError::InvalidResponse { message } => format!("Invalid response: {}", message),
        }
    }

    /// Text shown verbatim in alerts and message boxes.
    pub fn user_message(&self) -> String {
        self.response_text()
            .map(str::to_string)
            .unwrap_or_else(|| self.status_text())
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            BackendError::Rejected { status, .. } if *status >= 500 => "BACKEND_SERVER_ERROR",
            BackendError::Rejected { status: 404, .. } => "BACKEND_NOT_FOUND",
            BackendError::Rejected { .. } => "BACKEND_REJECTED",
            BackendError::Transport(HttpError::Timeout(_)) => "BACKEND_TIMEOUT",
            BackendError::Transport(_) => "BACKEND_TRANSPORT",
            BackendError::InvalidResponse { .. } => "BACKEND_INVALID_RESPONSE",
        }
    }
}

impl From<HttpError> for BackendError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ServerError { status, message } => {
                BackendError::rejected(status, String::new(), message)
            }
            other => BackendError::Transport(other),
        }
    }
}
