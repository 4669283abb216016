//! Folder resource trait.

use async_trait::async_trait;

use crate::error::BackendError;
use crate::models::{FolderKind, FolderRecord};

/// One REST collection of folders (audio, picture or video).
///
/// `save` is an upsert: records without an id are created, records with an
/// id update the stored folder of that id.
#[async_trait]
pub trait FolderBackend: Send + Sync {
    /// The kind of folder this resource serves.
    fn kind(&self) -> FolderKind;

    async fn fetch_all(&self) -> Result<Vec<FolderRecord>, BackendError>;

    async fn fetch_one(&self, id: &str) -> Result<FolderRecord, BackendError>;

    async fn save(&self, record: &FolderRecord) -> Result<FolderRecord, BackendError>;

    async fn destroy(&self, id: &str) -> Result<(), BackendError>;
}
