//! Error handling for the Holmes admin console.
//!
//! - **Backend errors**: failures of folder resource calls, carrying the text
//!   shown to the user
//! - **Template errors**: malformed or missing view templates
//! - **Config errors**: bad flags, environment values or unreadable files
//! - **Unified error type**: `AdminError` with `AdminResult<T>`
//!
//! | Error | Where it ends up |
//! |-------|------------------|
//! | `BackendError` during a view action | alert or message box |
//! | `BackendError` elsewhere | `AdminError::Backend` |
//! | `TemplateError`, `ConfigError`, `BundleError` | startup failure |

mod admin_error;
mod backend;
mod config;
mod template;

pub use admin_error::{AdminError, AdminResult};
pub use backend::BackendError;
pub use config::{BundleError, ConfigError};
pub use template::TemplateError;
