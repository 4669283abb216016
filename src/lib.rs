//! Holmes Admin - folder administration console for the Holmes media server
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod cli;
pub mod cli_output;
pub mod collection;
pub mod config;
pub mod console;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod models;
pub mod preview;
pub mod template;
pub mod traits;
pub mod views;
