//! Mock implementations for testing.
//!
//! Every trait seam of the views has a double here, so views can be driven
//! without a server, a terminal or a browser.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryFolderBackend`] - Folder resource over a vector
//! - [`RecordingDialogs`] - Dialogs with a preset confirmation answer
//! - [`MemorySurface`] - Render region and form fields in memory
//! - [`RecordingPicker`] - Path picker state

pub mod backend;
pub mod http;
pub mod ui;

pub use backend::{BackendCall, InMemoryFolderBackend};
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use ui::{DialogEvent, MemorySurface, RecordingDialogs, RecordingPicker};
