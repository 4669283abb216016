//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`RestFolderResource`] - Folder collection of the backbone REST API
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for every seam:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::InMemoryFolderBackend`] - Folder resource without a server
//! - [`mock::RecordingDialogs`], [`mock::MemorySurface`], [`mock::RecordingPicker`]

pub mod mock;
pub mod reqwest_http;
pub mod rest_backend;

pub use reqwest_http::ReqwestHttpClient;
pub use rest_backend::{RestFolderResource, BACKBONE_PREFIX};
