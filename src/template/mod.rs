//! View templates: a small Mustache-style engine and the named store views
//! acquire their templates from.

mod builtin;
mod engine;
mod store;

pub use builtin::{FOLDER_LIST_DIALOG, FOLDER_LIST_INLINE};
pub use engine::{escape_html, Template};
pub use store::TemplateStore;
