//! Directory browser filling the path field.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::AdminError;
use crate::traits::{FormField, PathPicker, Surface};

use super::io::ConsoleOutput;

#[derive(Debug, Default)]
struct PickerState {
    field: Option<FormField>,
    dir: PathBuf,
    entries: Vec<PathBuf>,
}

/// Lists the sub-directories of the field's current value (or the
/// filesystem root); `pick` writes a choice back and descends into it.
pub struct DirectoryPicker {
    surface: Arc<dyn Surface>,
    output: ConsoleOutput,
    state: Mutex<PickerState>,
}

impl DirectoryPicker {
    pub fn new(surface: Arc<dyn Surface>, output: ConsoleOutput) -> Self {
        Self {
            surface,
            output,
            state: Mutex::new(PickerState::default()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.lock().field.is_some()
    }

    /// Directories of the last listing.
    pub fn entries(&self) -> Vec<PathBuf> {
        self.lock().entries.clone()
    }

    /// Write entry `index` (1-based; 0 is the parent directory) into the
    /// field and list its sub-directories.
    pub fn pick(&self, index: usize) -> Result<PathBuf, AdminError> {
        let (field, chosen) = {
            let state = self.lock();
            let field = state
                .field
                .ok_or_else(|| AdminError::Command("no directory listing, use browse first".to_string()))?;
            let chosen = if index == 0 {
                state
                    .dir
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| state.dir.clone())
            } else {
                state
                    .entries
                    .get(index - 1)
                    .cloned()
                    .ok_or_else(|| AdminError::Command(format!("no entry {}", index)))?
            };
            (field, chosen)
        };

        self.surface
            .set_field(field, &chosen.to_string_lossy());
        self.list(field, chosen.clone());
        Ok(chosen)
    }

    fn list(&self, field: FormField, dir: PathBuf) {
        let entries = match read_subdirectories(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), "cannot list directory: {}", e);
                self.output
                    .line(&format!("  cannot list {}: {}", dir.display(), e));
                Vec::new()
            }
        };

        self.output.line(&format!("  {}", dir.display()));
        self.output.line("    0  ..");
        for (i, entry) in entries.iter().enumerate() {
            let name = entry
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| entry.display().to_string());
            self.output.line(&format!("  {:>3}  {}", i + 1, name));
        }

        let mut state = self.lock();
        state.field = Some(field);
        state.dir = dir;
        state.entries = entries;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PickerState> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl PathPicker for DirectoryPicker {
    fn show(&self, field: FormField) {
        let current = self.surface.field(field);
        let current = current.trim();
        let dir = if !current.is_empty() && Path::new(current).is_dir() {
            PathBuf::from(current)
        } else {
            filesystem_root()
        };
        self.list(field, dir);
    }

    fn hide(&self) {
        let mut state = self.lock();
        state.field = None;
        state.entries.clear();
    }
}

fn filesystem_root() -> PathBuf {
    std::env::current_dir()
        .ok()
        .and_then(|dir| dir.ancestors().last().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(std::path::MAIN_SEPARATOR.to_string()))
}

/// Sub-directories of `dir`, sorted, hidden ones skipped.
fn read_subdirectories(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter(|entry| !entry.file_name().to_string_lossy().starts_with('.'))
        .map(|entry| entry.path())
        .collect();
    dirs.sort();
    Ok(dirs)
}
