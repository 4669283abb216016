#![allow(dead_code)]

//! Common test utilities for integration tests.
//!
//! Builds folder list views wired to the in-memory doubles from
//! `holmes_admin::adapters::mock`, plus a few folder fixtures.
//!
//! # Example
//!
//! ```ignore
//! use common::{audio_folders, ViewHarness};
//!
//! let mut h = ViewHarness::admin_audio(audio_folders());
//! h.view.refresh().await;
//! assert!(h.surface.html().contains("Music"));
//! ```

pub mod mocks;

use std::sync::Arc;

use holmes_admin::adapters::mock::{
    InMemoryFolderBackend, MemorySurface, RecordingDialogs, RecordingPicker,
};
use holmes_admin::collection::FolderCollection;
use holmes_admin::i18n::MessageBundle;
use holmes_admin::models::FolderRecord;
use holmes_admin::template::TemplateStore;
use holmes_admin::views::{FolderListView, ViewCollaborators, ViewVariant};

/// Two audio folders as the backend lists them.
pub fn audio_folders() -> Vec<FolderRecord> {
    vec![
        FolderRecord::existing("1", "Music", "/mnt/music"),
        FolderRecord::existing("2", "Audiobooks", "/mnt/books"),
    ]
}

pub fn picture_folders() -> Vec<FolderRecord> {
    vec![FolderRecord::existing("7", "Photos", "/srv/photos")]
}

/// A view and every double it talks to.
pub struct ViewHarness {
    pub view: FolderListView,
    pub backend: InMemoryFolderBackend,
    pub surface: MemorySurface,
    pub dialogs: RecordingDialogs,
    pub picker: RecordingPicker,
}

impl ViewHarness {
    pub fn new(variant: ViewVariant, records: Vec<FolderRecord>) -> Self {
        let backend = InMemoryFolderBackend::with_records(variant.kind, records);
        let surface = MemorySurface::new(&variant.name);
        let dialogs = RecordingDialogs::new();
        let picker = RecordingPicker::new();
        let collaborators = ViewCollaborators {
            backend: Arc::new(backend.clone()),
            surface: Arc::new(surface.clone()),
            dialogs: Arc::new(dialogs.clone()),
            picker: Arc::new(picker.clone()),
            localizer: Arc::new(MessageBundle::embedded()),
        };
        let templates = TemplateStore::builtin().expect("built-in templates parse");
        let view = FolderListView::new(variant, &templates, FolderCollection::new(), collaborators)
            .expect("variant template exists");

        Self {
            view,
            backend,
            surface,
            dialogs,
            picker,
        }
    }

    pub fn admin_audio(records: Vec<FolderRecord>) -> Self {
        Self::new(ViewVariant::admin_audio(), records)
    }

    pub fn audio(records: Vec<FolderRecord>) -> Self {
        Self::new(ViewVariant::audio(), records)
    }

    /// Loaded from the backend, with the initial fetch forgotten.
    pub async fn loaded(variant: ViewVariant, records: Vec<FolderRecord>) -> Self {
        let mut harness = Self::new(variant, records);
        harness.view.refresh().await;
        harness.backend.clear_calls();
        harness.dialogs.clear_events();
        harness
    }
}
