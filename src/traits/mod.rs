//! Trait abstractions at the seams of the admin console.
//!
//! Views only talk to these traits, so the same view code runs against the
//! REST backend and terminal collaborators in the console, and against the
//! in-memory doubles from `crate::adapters::mock` in tests.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT, DELETE)
//! - [`FolderBackend`] - One REST folder collection
//! - [`Dialogs`] - Modals, confirmations, alerts and the message box
//! - [`Surface`] - Render region and form fields of a view
//! - [`PathPicker`] - Path browsing widget
//! - [`Localizer`] - Message lookup

pub mod backend;
pub mod dialogs;
pub mod http;
pub mod localizer;
pub mod picker;
pub mod surface;

pub use backend::FolderBackend;
pub use dialogs::{Dialogs, Severity};
pub use http::{json_headers, Headers, HttpClient, HttpError, Response};
pub use localizer::Localizer;
pub use picker::PathPicker;
pub use surface::{FormField, Surface};
