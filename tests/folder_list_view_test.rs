//! Integration tests for the folder list views driven through their
//! user actions.

mod common;

use common::{audio_folders, picture_folders, ViewHarness};
use holmes_admin::adapters::mock::{BackendCall, DialogEvent};
use holmes_admin::error::BackendError;
use holmes_admin::models::FolderRecord;
use holmes_admin::traits::{FormField, Severity, Surface};
use holmes_admin::views::{ActionOutcome, ViewVariant};

fn is_fetch_all(call: &BackendCall) -> bool {
    matches!(call, BackendCall::FetchAll)
}

#[tokio::test]
async fn test_edit_open_populates_form_from_backend() {
    let h = &mut ViewHarness::loaded(ViewVariant::admin_audio(), audio_folders()).await;

    let outcome = h.view.on_edit_open("1").await;

    assert!(matches!(outcome, ActionOutcome::DialogOpened));
    assert_eq!(h.backend.calls(), vec![BackendCall::FetchOne("1".to_string())]);
    assert_eq!(h.surface.field(FormField::Id), "1");
    assert_eq!(h.surface.field(FormField::Name), "Music");
    assert_eq!(h.surface.field(FormField::Path), "/mnt/music");
    assert_eq!(h.dialogs.modal_open().as_deref(), Some("audioDlg"));
    assert_eq!(h.dialogs.last_header().as_deref(), Some("Edit audio folder"));
}

#[tokio::test]
async fn test_add_folder_refetches_and_renders_it() {
    let h = &mut ViewHarness::loaded(ViewVariant::admin_audio(), audio_folders()).await;
    let renders_before = h.surface.render_count();

    assert!(matches!(h.view.on_add_open(), ActionOutcome::DialogOpened));
    assert_eq!(h.dialogs.last_header().as_deref(), Some("Add audio folder"));
    assert_eq!(h.surface.field(FormField::Id), "");

    h.surface.set_field(FormField::Name, "Podcasts");
    h.surface.set_field(FormField::Path, "/mnt/podcasts");
    let outcome = h.view.on_save().await;

    match outcome {
        ActionOutcome::Created(saved) => {
            assert_eq!(saved.id.as_deref(), Some("3"));
            assert_eq!(saved.name, "Podcasts");
        }
        other => panic!("expected a created folder, got {:?}", other),
    }
    assert_eq!(
        h.backend.calls(),
        vec![
            BackendCall::Create(FolderRecord::unsaved("Podcasts", "/mnt/podcasts")),
            BackendCall::FetchAll,
        ]
    );
    assert_eq!(h.view.collection().len(), 3);
    assert!(h.surface.html().contains("Podcasts"));
    assert_eq!(h.surface.render_count(), renders_before + 1);
    assert_eq!(h.dialogs.modal_open(), None);
    assert!(h.picker.shown_for().is_none());
}

#[tokio::test]
async fn test_save_creates_exactly_once_with_trimmed_values() {
    let h = &mut ViewHarness::loaded(ViewVariant::admin_audio(), audio_folders()).await;

    h.view.on_add_open();
    h.surface.set_field(FormField::Name, "  Podcasts  ");
    h.surface.set_field(FormField::Path, "\t/mnt/podcasts \n");
    h.view.on_save().await;

    let creates: Vec<FolderRecord> = h
        .backend
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            BackendCall::Create(record) => Some(record),
            _ => None,
        })
        .collect();
    assert_eq!(creates.len(), 1);
    assert_eq!(creates[0].id, None);
    assert_eq!(creates[0].name, "Podcasts");
    assert_eq!(creates[0].path, "/mnt/podcasts");
    assert_eq!(h.backend.count_calls(is_fetch_all), 1);
}

#[tokio::test]
async fn test_save_with_id_updates_that_folder() {
    let h = &mut ViewHarness::loaded(ViewVariant::admin_audio(), audio_folders()).await;

    h.view.on_edit_open("2").await;
    h.surface.set_field(FormField::Name, "Spoken word");
    let outcome = h.view.on_save().await;

    assert!(matches!(outcome, ActionOutcome::Updated(_)));
    assert!(h.backend.calls().contains(&BackendCall::Update(FolderRecord::existing(
        "2",
        "Spoken word",
        "/mnt/books"
    ))));
    assert_eq!(h.backend.count_calls(|c| matches!(c, BackendCall::Create(_))), 0);
    assert_eq!(h.backend.count_calls(is_fetch_all), 1);
    assert!(h.surface.html().contains("Spoken word"));
    assert!(!h.surface.html().contains("Audiobooks"));
}

#[tokio::test]
async fn test_save_error_goes_to_message_box_and_keeps_dialog_open() {
    let h = &mut ViewHarness::loaded(ViewVariant::admin_audio(), audio_folders()).await;
    h.view.on_add_open();
    h.surface.set_field(FormField::Name, "Podcasts");
    h.surface.set_field(FormField::Path, "/nowhere");
    h.backend
        .fail_next(BackendError::rejected(400, "Bad Request", "Path not found"));

    let outcome = h.view.on_save().await;

    assert!(outcome.is_failure());
    assert_eq!(
        h.dialogs.current_message(),
        Some(("Path not found".to_string(), Severity::Danger))
    );
    assert_eq!(h.dialogs.modal_open().as_deref(), Some("audioDlg"));
    assert!(h.dialogs.alerts().is_empty());
    assert_eq!(h.backend.count_calls(is_fetch_all), 0);
    // The form keeps what the user typed.
    assert_eq!(h.surface.field(FormField::Path), "/nowhere");
}

#[tokio::test]
async fn test_message_box_cleared_when_dialog_reopens() {
    let h = &mut ViewHarness::loaded(ViewVariant::admin_audio(), audio_folders()).await;
    h.view.on_add_open();
    h.backend
        .fail_next(BackendError::rejected(400, "Bad Request", "Path not found"));
    h.view.on_save().await;

    h.view.on_close();
    h.view.on_add_open();

    assert_eq!(h.dialogs.current_message(), None);
}

#[tokio::test]
async fn test_declined_remove_makes_no_call() {
    let h = &mut ViewHarness::loaded(ViewVariant::admin_audio(), audio_folders()).await;
    h.dialogs.answer_no();

    let outcome = h.view.on_remove("1").await;

    assert!(matches!(outcome, ActionOutcome::Declined));
    assert!(h.backend.calls().is_empty());
    assert_eq!(h.dialogs.confirmations(), vec!["Remove this audio folder?".to_string()]);
    assert_eq!(h.view.collection().len(), 2);
}

#[tokio::test]
async fn test_confirmed_remove_deletes_and_refreshes_once() {
    let h = &mut ViewHarness::loaded(ViewVariant::admin_audio(), audio_folders()).await;
    h.dialogs.answer_yes();

    let outcome = h.view.on_remove("2").await;

    assert!(matches!(outcome, ActionOutcome::Removed(ref id) if id == "2"));
    assert_eq!(
        h.backend.calls(),
        vec![BackendCall::Destroy("2".to_string()), BackendCall::FetchAll]
    );
    assert!(!h.surface.html().contains("Audiobooks"));
    assert!(h.surface.html().contains("Music"));
}

#[tokio::test]
async fn test_remove_failure_is_alerted_verbatim() {
    let h = &mut ViewHarness::loaded(ViewVariant::admin_audio(), audio_folders()).await;
    h.dialogs.answer_yes();

    let outcome = h.view.on_remove("99").await;

    assert!(outcome.is_failure());
    assert_eq!(h.dialogs.alerts(), vec!["Unknown folder".to_string()]);
    assert_eq!(h.backend.count_calls(is_fetch_all), 0);
}

#[tokio::test]
async fn test_edit_open_failure_is_alerted_and_no_dialog_shown() {
    let h = &mut ViewHarness::loaded(ViewVariant::admin_audio(), audio_folders()).await;

    let outcome = h.view.on_edit_open("42").await;

    assert!(outcome.is_failure());
    assert_eq!(h.dialogs.alerts(), vec!["Unknown folder".to_string()]);
    assert_eq!(h.dialogs.modal_open(), None);
}

#[tokio::test]
async fn test_render_is_pure() {
    let h = ViewHarness::loaded(ViewVariant::admin_audio(), audio_folders()).await;
    let renders = h.surface.render_count();

    let first = h.view.render_html();
    let second = h.view.render_html();

    assert_eq!(first, second);
    assert!(h.backend.calls().is_empty());
    assert_eq!(h.surface.render_count(), renders);
    assert!(h.dialogs.events().is_empty());
}

#[tokio::test]
async fn test_render_attaches_tooltips_after_each_replacement() {
    let h = &mut ViewHarness::admin_audio(audio_folders());

    h.view.refresh().await;
    h.view.render();

    assert_eq!(h.surface.render_count(), 2);
    assert_eq!(
        h.surface.tooltip_targets(),
        vec![
            "audioDlgEditOpen".to_string(),
            "audioFolderRemove".to_string(),
            "audioDlgAddOpen".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_inline_add_reads_fields_without_modal() {
    let h = &mut ViewHarness::loaded(ViewVariant::audio(), audio_folders()).await;
    h.surface.set_field(FormField::Name, " Podcasts ");
    h.surface.set_field(FormField::Path, "/mnt/podcasts");

    let outcome = h.view.on_add().await;

    assert!(matches!(outcome, ActionOutcome::Created(_)));
    assert!(h.surface.html().contains("Podcasts"));
    assert!(h
        .dialogs
        .events()
        .iter()
        .all(|event| !matches!(event, DialogEvent::ShowModal { .. } | DialogEvent::HideModal(_))));
    assert!(h.surface.tooltip_targets().is_empty());
}

#[tokio::test]
async fn test_inline_add_error_goes_to_message_box() {
    let h = &mut ViewHarness::loaded(ViewVariant::picture(), picture_folders()).await;
    h.backend
        .fail_next(BackendError::rejected(409, "Conflict", "Folder already exists"));

    let outcome = h.view.on_add().await;

    assert!(outcome.is_failure());
    assert_eq!(
        h.dialogs.current_message(),
        Some(("Folder already exists".to_string(), Severity::Danger))
    );
}

#[tokio::test]
async fn test_add_on_dialog_variant_is_ignored() {
    let h = &mut ViewHarness::loaded(ViewVariant::admin_video(), vec![]).await;

    assert!(matches!(h.view.on_add().await, ActionOutcome::Ignored));
    assert!(h.backend.calls().is_empty());
}

#[tokio::test]
async fn test_browse_only_on_browsable_variants() {
    let admin = &mut ViewHarness::admin_audio(vec![]);
    assert!(matches!(admin.view.on_browse(), ActionOutcome::PickerShown));
    assert_eq!(admin.picker.shown_for(), Some(FormField::Path));

    let inline = &mut ViewHarness::audio(vec![]);
    assert!(matches!(inline.view.on_browse(), ActionOutcome::Ignored));
    assert_eq!(inline.picker.open_count(), 0);
}

#[tokio::test]
async fn test_close_hides_picker_and_dialog() {
    let h = &mut ViewHarness::loaded(ViewVariant::admin_picture(), picture_folders()).await;
    h.view.on_edit_open("7").await;
    h.view.on_browse();

    assert!(matches!(h.view.on_close(), ActionOutcome::Closed));
    assert_eq!(h.dialogs.modal_open(), None);
    assert!(h.picker.shown_for().is_none());
    assert!(h.backend.calls().iter().all(|c| !c.eq(&BackendCall::FetchAll)));
}

#[tokio::test]
async fn test_refresh_failure_is_alerted() {
    let h = &mut ViewHarness::admin_audio(audio_folders());
    h.backend
        .fail_next(BackendError::rejected(500, "Internal Server Error", ""));

    let outcome = h.view.refresh().await;

    assert!(outcome.is_failure());
    assert_eq!(h.dialogs.alerts(), vec!["Internal Server Error".to_string()]);
    assert_eq!(h.surface.render_count(), 0);
}
