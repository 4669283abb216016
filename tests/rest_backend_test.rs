//! Folder resource tests against a real HTTP server using wiremock.
//!
//! These exercise `ReqwestHttpClient` and `RestFolderResource` together on
//! the backbone URLs the Holmes server exposes.

use std::sync::Arc;

use holmes_admin::adapters::mock::{MemorySurface, RecordingDialogs, RecordingPicker};
use holmes_admin::adapters::{ReqwestHttpClient, RestFolderResource};
use holmes_admin::collection::FolderCollection;
use holmes_admin::error::BackendError;
use holmes_admin::i18n::MessageBundle;
use holmes_admin::models::{FolderKind, FolderRecord};
use holmes_admin::template::TemplateStore;
use holmes_admin::traits::{FolderBackend, FormField, HttpError, Surface};
use holmes_admin::views::{ActionOutcome, FolderListView, ViewCollaborators, ViewVariant};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AUDIO_PATH: &str = "/backend/backbone/audioFolders";

fn resource(server: &MockServer, kind: FolderKind) -> RestFolderResource<ReqwestHttpClient> {
    RestFolderResource::new(ReqwestHttpClient::new(), &server.uri(), kind)
}

#[tokio::test]
async fn test_fetch_all_lists_folders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(AUDIO_PATH))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "1", "name": "Music", "path": "/mnt/music"},
            {"id": 2, "name": "Audiobooks", "path": "/mnt/books"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let folders = resource(&server, FolderKind::Audio).fetch_all().await.unwrap();

    assert_eq!(
        folders,
        vec![
            FolderRecord::existing("1", "Music", "/mnt/music"),
            FolderRecord::existing("2", "Audiobooks", "/mnt/books"),
        ]
    );
}

#[tokio::test]
async fn test_fetch_one_uses_item_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/backend/backbone/pictureFolders/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": "7", "name": "Photos", "path": "/srv/photos"}
        )))
        .mount(&server)
        .await;

    let folder = resource(&server, FolderKind::Picture)
        .fetch_one("7")
        .await
        .unwrap();

    assert_eq!(folder, FolderRecord::existing("7", "Photos", "/srv/photos"));
}

#[tokio::test]
async fn test_create_posts_null_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(AUDIO_PATH))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"id": null, "name": "Podcasts", "path": "/mnt/podcasts"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": "3", "name": "Podcasts", "path": "/mnt/podcasts"}
        )))
        .expect(1)
        .mount(&server)
        .await;

    let saved = resource(&server, FolderKind::Audio)
        .save(&FolderRecord::unsaved(" Podcasts ", "/mnt/podcasts"))
        .await
        .unwrap();

    assert_eq!(saved.id.as_deref(), Some("3"));
}

#[tokio::test]
async fn test_update_puts_to_item_url() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/backend/backbone/videoFolders/5"))
        .and(body_json(json!({"id": "5", "name": "Films", "path": "/mnt/films"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let record = FolderRecord::existing("5", "Films", "/mnt/films");
    let saved = resource(&server, FolderKind::Video)
        .save(&record)
        .await
        .unwrap();

    // An empty body echoes the submitted record.
    assert_eq!(saved, record);
}

#[tokio::test]
async fn test_destroy_sends_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/1", AUDIO_PATH)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    resource(&server, FolderKind::Audio).destroy("1").await.unwrap();
}

#[tokio::test]
async fn test_rejection_carries_response_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(AUDIO_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("Path not found"))
        .mount(&server)
        .await;

    let err = resource(&server, FolderKind::Audio)
        .save(&FolderRecord::unsaved("Podcasts", "/nowhere"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Path not found");
    assert!(matches!(err, BackendError::Rejected { status: 400, .. }));
}

#[tokio::test]
async fn test_rejection_without_body_uses_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(AUDIO_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = resource(&server, FolderKind::Audio)
        .fetch_all()
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Service Unavailable");
    assert_eq!(err.error_code(), "BACKEND_SERVER_ERROR");
}

#[tokio::test]
async fn test_invalid_json_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(AUDIO_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let err = resource(&server, FolderKind::Audio)
        .fetch_all()
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on the discard port of the loopback interface.
    let resource = RestFolderResource::new(
        ReqwestHttpClient::new(),
        "http://127.0.0.1:9",
        FolderKind::Audio,
    );

    let err = resource.fetch_all().await.unwrap_err();

    assert!(matches!(
        err,
        BackendError::Transport(HttpError::ConnectionFailed(_))
    ));
}

#[tokio::test]
async fn test_view_add_round_trip_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(AUDIO_PATH))
        .and(body_json(json!({"id": null, "name": "Podcasts", "path": "/mnt/podcasts"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": "3", "name": "Podcasts", "path": "/mnt/podcasts"}
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(AUDIO_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "1", "name": "Music", "path": "/mnt/music"},
            {"id": "3", "name": "Podcasts", "path": "/mnt/podcasts"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let surface = MemorySurface::new("admin-audio");
    let collaborators = ViewCollaborators {
        backend: Arc::new(resource(&server, FolderKind::Audio)),
        surface: Arc::new(surface.clone()),
        dialogs: Arc::new(RecordingDialogs::new()),
        picker: Arc::new(RecordingPicker::new()),
        localizer: Arc::new(MessageBundle::embedded()),
    };
    let mut view = FolderListView::new(
        ViewVariant::admin_audio(),
        &TemplateStore::builtin().unwrap(),
        FolderCollection::new(),
        collaborators,
    )
    .unwrap();

    view.on_add_open();
    surface.set_field(FormField::Name, "Podcasts");
    surface.set_field(FormField::Path, "/mnt/podcasts");
    let outcome = view.on_save().await;

    assert!(matches!(outcome, ActionOutcome::Created(_)));
    assert_eq!(view.collection().len(), 2);
    assert!(surface.html().contains("/mnt/podcasts"));
}
