//! Folder resources served by the Holmes backbone REST API.
//!
//! Each folder kind is a plain collection:
//!
//! | Call | Request |
//! |------|---------|
//! | list | `GET {server}/backend/backbone/{resource}` |
//! | one | `GET .../{resource}/{id}` |
//! | create | `POST .../{resource}` with `{"id":null,"name":..,"path":..}` |
//! | update | `PUT .../{resource}/{id}` with `{"id":..,"name":..,"path":..}` |
//! | delete | `DELETE .../{resource}/{id}` |

use async_trait::async_trait;

use crate::error::BackendError;
use crate::models::{FolderKind, FolderRecord};
use crate::traits::{json_headers, FolderBackend, HttpClient, Response};

/// Path of the backbone API below the server URL.
pub const BACKBONE_PREFIX: &str = "/backend/backbone";

/// One folder collection reached through an [`HttpClient`].
#[derive(Debug, Clone)]
pub struct RestFolderResource<C: HttpClient> {
    client: C,
    server_url: String,
    kind: FolderKind,
}

impl<C: HttpClient> RestFolderResource<C> {
    pub fn new(client: C, server_url: &str, kind: FolderKind) -> Self {
        Self {
            client,
            server_url: server_url.trim_end_matches('/').to_string(),
            kind,
        }
    }

    pub fn collection_url(&self) -> String {
        format!(
            "{}{}/{}",
            self.server_url,
            BACKBONE_PREFIX,
            self.kind.resource()
        )
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id))
    }

    /// Turn a non-2xx response into a rejection carrying its body.
    fn check(response: Response) -> Result<Response, BackendError> {
        if response.is_success() {
            return Ok(response);
        }
        let status_text = reqwest::StatusCode::from_u16(response.status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or_default();
        Err(BackendError::rejected(
            response.status,
            status_text,
            response.text_lossy(),
        ))
    }

    fn decode<T: serde::de::DeserializeOwned>(response: &Response) -> Result<T, BackendError> {
        response.json().map_err(|err| BackendError::InvalidResponse {
            message: err.to_string(),
        })
    }

    fn encode(record: &FolderRecord) -> Result<String, BackendError> {
        serde_json::to_string(record).map_err(|err| BackendError::InvalidResponse {
            message: err.to_string(),
        })
    }
}

#[async_trait]
impl<C: HttpClient> FolderBackend for RestFolderResource<C> {
    fn kind(&self) -> FolderKind {
        self.kind
    }

    async fn fetch_all(&self) -> Result<Vec<FolderRecord>, BackendError> {
        let url = self.collection_url();
        tracing::debug!(%url, "fetching folders");
        let response = Self::check(self.client.get(&url, &json_headers()).await?)?;
        Self::decode(&response)
    }

    async fn fetch_one(&self, id: &str) -> Result<FolderRecord, BackendError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "fetching folder");
        let response = Self::check(self.client.get(&url, &json_headers()).await?)?;
        Self::decode(&response)
    }

    async fn save(&self, record: &FolderRecord) -> Result<FolderRecord, BackendError> {
        let body = Self::encode(record)?;
        let response = match record.id.as_deref() {
            None => {
                let url = self.collection_url();
                tracing::debug!(%url, "creating folder");
                self.client.post(&url, &body, &json_headers()).await?
            }
            Some(id) => {
                let url = self.item_url(id);
                tracing::debug!(%url, "updating folder");
                self.client.put(&url, &body, &json_headers()).await?
            }
        };
        let response = Self::check(response)?;

        if response.body.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(record.clone());
        }
        Self::decode(&response)
    }

    async fn destroy(&self, id: &str) -> Result<(), BackendError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "removing folder");
        Self::check(self.client.delete(&url, &json_headers()).await?)?;
        Ok(())
    }
}
