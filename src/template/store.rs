//! Named template registry.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::{AdminError, ConfigError, TemplateError};

use super::builtin::{
    FOLDER_LIST_DIALOG, FOLDER_LIST_DIALOG_HTML, FOLDER_LIST_INLINE, FOLDER_LIST_INLINE_HTML,
};
use super::engine::Template;

/// Parsed templates looked up by name.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<String, Arc<Template>>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the templates shipped with the console.
    pub fn builtin() -> Result<Self, TemplateError> {
        let mut store = Self::new();
        store.insert(FOLDER_LIST_DIALOG, FOLDER_LIST_DIALOG_HTML)?;
        store.insert(FOLDER_LIST_INLINE, FOLDER_LIST_INLINE_HTML)?;
        Ok(store)
    }

    /// Parse and register `source` under `name`, replacing any previous one.
    pub fn insert(&mut self, name: &str, source: &str) -> Result<(), TemplateError> {
        let template = Template::parse(name, source)?;
        self.templates.insert(name.to_string(), Arc::new(template));
        Ok(())
    }

    /// Register every `*.html` file of `dir`.
    ///
    /// Each file is reachable by its file name and by its stem, so
    /// `folder_list_template.html` overrides `folder_list_template`.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, AdminError> {
        let entries = std::fs::read_dir(dir).map_err(|source| ConfigError::Unreadable {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut loaded = 0;
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }
            let source = std::fs::read_to_string(&path).map_err(|source| {
                ConfigError::Unreadable {
                    path: path.clone(),
                    source,
                }
            })?;
            if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
                self.insert(file_name, &source)?;
            }
            if let Some(stem) = path.file_stem().and_then(|n| n.to_str()) {
                self.insert(stem, &source)?;
            }
            tracing::debug!(path = %path.display(), "loaded template override");
            loaded += 1;
        }
        Ok(loaded)
    }

    pub fn get(&self, name: &str) -> Result<Arc<Template>, TemplateError> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }
}
