//! In-memory folder resource for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::BackendError;
use crate::models::{FolderKind, FolderRecord};
use crate::traits::FolderBackend;

/// A call received by [`InMemoryFolderBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    FetchAll,
    FetchOne(String),
    Create(FolderRecord),
    Update(FolderRecord),
    Destroy(String),
}

#[derive(Debug, Default)]
struct State {
    records: Vec<FolderRecord>,
    next_id: u64,
    calls: Vec<BackendCall>,
    failures: VecDeque<Option<BackendError>>,
}

/// Folder resource backed by a vector, recording every call.
///
/// Ids are assigned from a counter on create. Queued outcomes apply to the
/// next calls in order, whatever those calls are: [`InMemoryFolderBackend::fail_next`]
/// fails one call and [`InMemoryFolderBackend::pass_next`] lets one through.
///
/// # Example
///
/// ```
/// use holmes_admin::adapters::mock::{BackendCall, InMemoryFolderBackend};
/// use holmes_admin::models::{FolderKind, FolderRecord};
///
/// let backend = InMemoryFolderBackend::with_records(
///     FolderKind::Audio,
///     vec![FolderRecord::existing("1", "Music", "/mnt/music")],
/// );
/// assert_eq!(backend.records().len(), 1);
/// assert!(backend.calls().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryFolderBackend {
    kind: FolderKind,
    state: Arc<Mutex<State>>,
}

impl InMemoryFolderBackend {
    pub fn new(kind: FolderKind) -> Self {
        Self::with_records(kind, Vec::new())
    }

    pub fn with_records(kind: FolderKind, records: Vec<FolderRecord>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|record| record.id.as_deref()?.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            kind,
            state: Arc::new(Mutex::new(State {
                records,
                next_id,
                ..State::default()
            })),
        }
    }

    /// Make the next call fail with `err`.
    pub fn fail_next(&self, err: BackendError) {
        self.state.lock().unwrap().failures.push_back(Some(err));
    }

    /// Let the next call through, so a later queued failure hits the one
    /// after it.
    pub fn pass_next(&self) {
        self.state.lock().unwrap().failures.push_back(None);
    }

    pub fn records(&self) -> Vec<FolderRecord> {
        self.state.lock().unwrap().records.clone()
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of recorded calls matching `predicate`.
    pub fn count_calls(&self, predicate: impl Fn(&BackendCall) -> bool) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|call| predicate(call))
            .count()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    fn record_call(&self, call: BackendCall) -> Result<(), BackendError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.failures.pop_front().flatten() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn unknown_folder() -> BackendError {
        BackendError::rejected(404, "Not Found", "Unknown folder")
    }
}

#[async_trait]
impl FolderBackend for InMemoryFolderBackend {
    fn kind(&self) -> FolderKind {
        self.kind
    }

    async fn fetch_all(&self) -> Result<Vec<FolderRecord>, BackendError> {
        self.record_call(BackendCall::FetchAll)?;
        Ok(self.records())
    }

    async fn fetch_one(&self, id: &str) -> Result<FolderRecord, BackendError> {
        self.record_call(BackendCall::FetchOne(id.to_string()))?;
        let state = self.state.lock().unwrap();
        state
            .records
            .iter()
            .find(|record| record.id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(Self::unknown_folder)
    }

    async fn save(&self, record: &FolderRecord) -> Result<FolderRecord, BackendError> {
        match record.id.as_deref() {
            None => {
                self.record_call(BackendCall::Create(record.clone()))?;
                let mut state = self.state.lock().unwrap();
                let id = state.next_id.to_string();
                state.next_id += 1;
                let saved = FolderRecord::existing(&id, &record.name, &record.path);
                state.records.push(saved.clone());
                Ok(saved)
            }
            Some(id) => {
                self.record_call(BackendCall::Update(record.clone()))?;
                let mut state = self.state.lock().unwrap();
                let existing = state
                    .records
                    .iter_mut()
                    .find(|existing| existing.id.as_deref() == Some(id))
                    .ok_or_else(Self::unknown_folder)?;
                *existing = record.clone();
                Ok(record.clone())
            }
        }
    }

    async fn destroy(&self, id: &str) -> Result<(), BackendError> {
        self.record_call(BackendCall::Destroy(id.to_string()))?;
        let mut state = self.state.lock().unwrap();
        let index = state
            .records
            .iter()
            .position(|record| record.id.as_deref() == Some(id))
            .ok_or_else(Self::unknown_folder)?;
        state.records.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let backend = InMemoryFolderBackend::with_records(
            FolderKind::Picture,
            vec![FolderRecord::existing("4", "Photos", "/mnt/photos")],
        );

        let saved = backend
            .save(&FolderRecord::unsaved("Scans", "/mnt/scans"))
            .await
            .unwrap();

        assert_eq!(saved.id.as_deref(), Some("5"));
        assert_eq!(backend.records().len(), 2);
        assert_eq!(
            backend.calls(),
            vec![BackendCall::Create(FolderRecord::unsaved("Scans", "/mnt/scans"))]
        );
    }

    #[tokio::test]
    async fn test_unknown_id_is_rejected() {
        let backend = InMemoryFolderBackend::new(FolderKind::Audio);

        let err = backend.fetch_one("3").await.unwrap_err();
        assert_eq!(err.user_message(), "Unknown folder");
        assert!(backend.destroy("3").await.is_err());
        assert!(backend
            .save(&FolderRecord::existing("3", "x", "/x"))
            .await
            .is_err());
        assert_eq!(backend.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_fail_next_applies_once() {
        let backend = InMemoryFolderBackend::new(FolderKind::Video);
        backend.fail_next(BackendError::rejected(400, "Bad Request", "Path not found"));

        let err = backend
            .save(&FolderRecord::unsaved("Films", "/nope"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Path not found");
        assert!(backend.records().is_empty());

        assert!(backend.fetch_all().await.is_ok());
        assert_eq!(backend.count_calls(|c| *c == BackendCall::FetchAll), 1);
    }
}
