//! Client-side cache of folder records.
//!
//! The collection is the single source a view renders from. Every mutation
//! is announced on a broadcast channel so the owning view can re-render.

use serde_json::Value;
use tokio::sync::broadcast;

use crate::error::BackendError;
use crate::models::FolderRecord;
use crate::traits::FolderBackend;

const EVENT_CAPACITY: usize = 64;

/// Lifecycle events published by a [`FolderCollection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionEvent {
    /// Contents replaced wholesale (after a fetch).
    Reset,
    Add(FolderRecord),
    Change(FolderRecord),
    Remove(FolderRecord),
}

/// Ordered set of folder records kept in sync with a backend by explicit
/// refreshes.
#[derive(Debug)]
pub struct FolderCollection {
    records: Vec<FolderRecord>,
    events: broadcast::Sender<CollectionEvent>,
}

impl FolderCollection {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<FolderRecord>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { records, events }
    }

    /// Receive every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<CollectionEvent> {
        self.events.subscribe()
    }

    pub fn records(&self) -> &[FolderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&FolderRecord> {
        self.records
            .iter()
            .find(|record| record.id.as_deref() == Some(id))
    }

    /// JSON array of the records, as handed to templates.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.records
                .iter()
                .map(|record| serde_json::to_value(record).unwrap_or(Value::Null))
                .collect(),
        )
    }

    /// Replace every record.
    pub fn reset(&mut self, records: Vec<FolderRecord>) {
        self.records = records;
        self.publish(CollectionEvent::Reset);
    }

    pub fn add(&mut self, record: FolderRecord) {
        self.records.push(record.clone());
        self.publish(CollectionEvent::Add(record));
    }

    /// Replace the record with the same id. Returns false when there is none.
    pub fn change(&mut self, record: FolderRecord) -> bool {
        let Some(id) = record.id.as_deref() else {
            return false;
        };
        match self
            .records
            .iter_mut()
            .find(|existing| existing.id.as_deref() == Some(id))
        {
            Some(existing) => {
                *existing = record.clone();
                self.publish(CollectionEvent::Change(record));
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<FolderRecord> {
        let index = self
            .records
            .iter()
            .position(|record| record.id.as_deref() == Some(id))?;
        let removed = self.records.remove(index);
        self.publish(CollectionEvent::Remove(removed.clone()));
        Some(removed)
    }

    /// Reload every record from `backend`.
    ///
    /// On failure the current contents are kept and no event is published.
    pub async fn fetch(&mut self, backend: &dyn FolderBackend) -> Result<usize, BackendError> {
        let records = backend.fetch_all().await?;
        let count = records.len();
        self.reset(records);
        Ok(count)
    }

    fn publish(&self, event: CollectionEvent) {
        // No subscribers is fine; the collection works standalone.
        let _ = self.events.send(event);
    }
}

impl Default for FolderCollection {
    fn default() -> Self {
        Self::new()
    }
}
