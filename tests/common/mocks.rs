//! Mock HTTP configurations for the folder resources.
//!
//! Re-exports the mock client from `holmes_admin::adapters::mock` and adds
//! a builder that knows the backbone URLs of each folder kind.

pub use holmes_admin::adapters::mock::{MockHttpClient, MockResponse, RecordedRequest};
pub use holmes_admin::traits::HttpError;

use holmes_admin::adapters::BACKBONE_PREFIX;
use holmes_admin::models::{FolderKind, FolderRecord};

/// Server URL every mock configuration answers for.
pub const TEST_SERVER: &str = "http://holmes.test:8085";

/// Collection URL of `kind` on [`TEST_SERVER`].
pub fn collection_url(kind: FolderKind) -> String {
    format!("{}{}/{}", TEST_SERVER, BACKBONE_PREFIX, kind.resource())
}

pub fn item_url(kind: FolderKind, id: &str) -> String {
    format!("{}/{}", collection_url(kind), id)
}

/// Builder for a [`MockHttpClient`] serving folder collections.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    /// Every collection answers with an empty list unless configured.
    pub fn new() -> Self {
        let client = MockHttpClient::new();
        for kind in FolderKind::ALL {
            client.set_method_response("GET", &collection_url(kind), MockResponse::text(200, "[]"));
        }
        Self { client }
    }

    /// Serve `records` as the list of `kind`, and each record on its item URL.
    pub fn with_folders(self, kind: FolderKind, records: &[FolderRecord]) -> Self {
        let body = serde_json::to_string(records).expect("records serialize");
        self.client
            .set_method_response("GET", &collection_url(kind), MockResponse::text(200, &body));
        for record in records {
            if let Some(id) = &record.id {
                let body = serde_json::to_string(record).expect("record serializes");
                self.client
                    .set_method_response("GET", &item_url(kind, id), MockResponse::text(200, &body));
            }
        }
        self
    }

    /// Answer `method` on `url` with a status and text body.
    pub fn with_text(self, method: &str, url: &str, status: u16, body: &str) -> Self {
        self.client
            .set_method_response(method, url, MockResponse::text(status, body));
        self
    }

    #[allow(dead_code)]
    pub fn with_transport_error(self, url: &str, err: HttpError) -> Self {
        self.client.set_response(url, MockResponse::Error(err));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Requests of one method, in order.
#[allow(dead_code)]
pub fn requests_of(client: &MockHttpClient, method: &str) -> Vec<RecordedRequest> {
    client
        .get_requests()
        .into_iter()
        .filter(|request| request.method == method)
        .collect()
}
