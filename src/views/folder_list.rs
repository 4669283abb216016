//! Folder list view: renders a collection and runs the add/edit/remove
//! actions against its folder resource.
//!
//! Actions take `&mut self`, so one view never has two requests in flight.
//! After every successful mutation the collection is fetched again and the
//! resulting `reset` event re-renders the region.

use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::TryRecvError};
use uuid::Uuid;

use crate::collection::{CollectionEvent, FolderCollection};
use crate::error::{BackendError, TemplateError};
use crate::models::{FolderForm, FolderRecord};
use crate::template::{Template, TemplateStore};
use crate::traits::{Dialogs, FolderBackend, FormField, Localizer, PathPicker, Severity, Surface};

use super::outcome::ActionOutcome;
use super::variant::{FormFlow, ViewVariant};

/// The collaborators a view talks to.
#[derive(Clone)]
pub struct ViewCollaborators {
    pub backend: Arc<dyn FolderBackend>,
    pub surface: Arc<dyn Surface>,
    pub dialogs: Arc<dyn Dialogs>,
    pub picker: Arc<dyn PathPicker>,
    pub localizer: Arc<dyn Localizer>,
}

pub struct FolderListView {
    variant: ViewVariant,
    template: Arc<Template>,
    collection: FolderCollection,
    events: broadcast::Receiver<CollectionEvent>,
    backend: Arc<dyn FolderBackend>,
    surface: Arc<dyn Surface>,
    dialogs: Arc<dyn Dialogs>,
    picker: Arc<dyn PathPicker>,
    localizer: Arc<dyn Localizer>,
}

impl FolderListView {
    /// Acquire the variant's template and bind rendering to `collection`.
    ///
    /// Nothing is rendered until the first collection event or an explicit
    /// [`FolderListView::render`].
    pub fn new(
        variant: ViewVariant,
        templates: &TemplateStore,
        collection: FolderCollection,
        collaborators: ViewCollaborators,
    ) -> Result<Self, TemplateError> {
        let template = templates.get(&variant.template)?;
        if collaborators.backend.kind() != variant.kind {
            tracing::warn!(
                view = %variant.name,
                backend = %collaborators.backend.kind(),
                "view bound to a resource of another folder kind"
            );
        }
        let events = collection.subscribe();

        Ok(Self {
            variant,
            template,
            collection,
            events,
            backend: collaborators.backend,
            surface: collaborators.surface,
            dialogs: collaborators.dialogs,
            picker: collaborators.picker,
            localizer: collaborators.localizer,
        })
    }

    pub fn variant(&self) -> &ViewVariant {
        &self.variant
    }

    pub fn name(&self) -> &str {
        &self.variant.name
    }

    pub fn collection(&self) -> &FolderCollection {
        &self.collection
    }

    /// Mutate the collection directly. Call [`FolderListView::sync`]
    /// afterwards to re-render.
    pub fn collection_mut(&mut self) -> &mut FolderCollection {
        &mut self.collection
    }

    pub fn surface(&self) -> &Arc<dyn Surface> {
        &self.surface
    }

    /// Slot data handed to the template.
    pub fn slot_data(&self) -> Value {
        let labels = &self.variant.labels;
        let targets = &self.variant.targets;
        let mut data = json!({
            "folders": self.collection.to_json(),
            "title": self.text(&labels.title),
            "nameLabel": self.text(&labels.name),
            "pathLabel": self.text(&labels.path),
            "addLabel": self.text(&labels.add),
            "editLabel": self.text(&labels.edit),
            "removeLabel": self.text(&labels.remove),
            "removeConfirm": self.text(&labels.remove_confirm),
            "addTarget": targets.add,
            "editTarget": targets.edit,
            "removeTarget": targets.remove,
            "browsable": self.variant.browsable,
        });

        let optional = [
            ("description", labels.description.as_ref().map(|k| self.text(k))),
            ("saveLabel", labels.save.as_ref().map(|k| self.text(k))),
            ("cancelLabel", labels.cancel.as_ref().map(|k| self.text(k))),
            ("icon", self.variant.icon.clone()),
        ];
        for (slot, value) in optional {
            if let Some(value) = value {
                data[slot] = Value::String(value);
            }
        }
        if self.variant.flow == FormFlow::Dialog {
            data["dialogId"] = Value::String(self.variant.dialog_id.clone());
        }
        data
    }

    /// Markup for the current collection. Same input, same output.
    pub fn render_html(&self) -> String {
        self.template.render(&self.slot_data())
    }

    /// Replace the region content and reattach tooltips.
    pub fn render(&self) {
        let html = self.render_html();
        self.surface.replace_html(&html);
        self.surface.attach_tooltips(&self.variant.tooltip_targets());
        tracing::trace!(view = %self.variant.name, bytes = html.len(), "rendered");
    }

    /// Drain pending collection events and render once if there were any.
    ///
    /// Returns whether a render happened. A lagged receiver also renders,
    /// since every event leads to the same full render.
    pub fn sync(&mut self) -> bool {
        let mut dirty = false;
        loop {
            match self.events.try_recv() {
                Ok(_) => dirty = true,
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(view = %self.variant.name, skipped, "collection events lagged");
                    dirty = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        if dirty {
            self.render();
        }
        dirty
    }

    /// Reload the collection from the backend.
    pub async fn refresh(&mut self) -> ActionOutcome {
        let request_id = Uuid::new_v4();
        match self.reload(request_id).await {
            Ok(count) => ActionOutcome::Refreshed(count),
            Err(err) => ActionOutcome::Failed(err),
        }
    }

    /// Submit the inline form as a new folder.
    pub async fn on_add(&mut self) -> ActionOutcome {
        if self.variant.flow != FormFlow::Inline {
            return ActionOutcome::Ignored;
        }
        let request_id = Uuid::new_v4();
        let record = FolderRecord::unsaved(
            &self.surface.field(FormField::Name),
            &self.surface.field(FormField::Path),
        );
        tracing::info!(view = %self.variant.name, %request_id, name = %record.name, "adding folder");

        match self.backend.save(&record).await {
            Ok(saved) => {
                self.after_mutation(request_id).await;
                ActionOutcome::Created(saved)
            }
            Err(err) => self.report_in_message_box(request_id, err),
        }
    }

    /// Open an empty form titled for creation.
    pub fn on_add_open(&mut self) -> ActionOutcome {
        let key = self
            .variant
            .labels
            .add_title
            .clone()
            .unwrap_or_else(|| self.variant.labels.add.clone());
        self.fill_form(&FolderForm::default());
        self.show_dialog(&self.text(&key));
        ActionOutcome::DialogOpened
    }

    /// Load folder `id` from the backend into the form.
    pub async fn on_edit_open(&mut self, id: &str) -> ActionOutcome {
        let request_id = Uuid::new_v4();
        tracing::info!(view = %self.variant.name, %request_id, folder_id = id, "opening folder");

        match self.backend.fetch_one(id).await {
            Ok(record) => {
                let key = self
                    .variant
                    .labels
                    .update_title
                    .clone()
                    .unwrap_or_else(|| self.variant.labels.edit.clone());
                self.fill_form(&FolderForm::from_record(&record));
                self.show_dialog(&self.text(&key));
                ActionOutcome::DialogOpened
            }
            Err(err) => self.report_in_alert(request_id, err),
        }
    }

    /// Create or update the folder in the form, depending on its id field.
    pub async fn on_save(&mut self) -> ActionOutcome {
        let request_id = Uuid::new_v4();
        let form = self.read_form();
        self.picker.hide();
        let record = form.to_record();
        tracing::info!(
            view = %self.variant.name,
            %request_id,
            folder_id = record.id.as_deref().unwrap_or(""),
            name = %record.name,
            "saving folder"
        );

        match self.backend.save(&record).await {
            Ok(saved) => {
                self.hide_dialog();
                self.after_mutation(request_id).await;
                if record.is_new() {
                    ActionOutcome::Created(saved)
                } else {
                    ActionOutcome::Updated(saved)
                }
            }
            Err(err) => self.report_in_message_box(request_id, err),
        }
    }

    pub fn on_close(&mut self) -> ActionOutcome {
        self.picker.hide();
        self.hide_dialog();
        ActionOutcome::Closed
    }

    /// Open the path picker on the path field.
    pub fn on_browse(&mut self) -> ActionOutcome {
        if !self.variant.browsable {
            return ActionOutcome::Ignored;
        }
        self.picker.show(FormField::Path);
        ActionOutcome::PickerShown
    }

    /// Delete folder `id` once the user confirms.
    pub async fn on_remove(&mut self, id: &str) -> ActionOutcome {
        let prompt = self.text(&self.variant.labels.remove_confirm);
        if !self.dialogs.confirm(&prompt).await {
            tracing::debug!(view = %self.variant.name, folder_id = id, "removal declined");
            return ActionOutcome::Declined;
        }

        let request_id = Uuid::new_v4();
        tracing::info!(view = %self.variant.name, %request_id, folder_id = id, "removing folder");
        match self.backend.destroy(id).await {
            Ok(()) => {
                self.after_mutation(request_id).await;
                ActionOutcome::Removed(id.to_string())
            }
            Err(err) => self.report_in_alert(request_id, err),
        }
    }

    async fn reload(&mut self, request_id: Uuid) -> Result<usize, BackendError> {
        match self.collection.fetch(self.backend.as_ref()).await {
            Ok(count) => {
                self.sync();
                tracing::debug!(view = %self.variant.name, %request_id, count, "collection reloaded");
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(
                    view = %self.variant.name,
                    %request_id,
                    code = err.error_code(),
                    "reload failed: {}",
                    err
                );
                self.dialogs.alert(&err.user_message());
                Err(err)
            }
        }
    }

    async fn after_mutation(&mut self, request_id: Uuid) {
        // A failed reload has already been alerted.
        let _ = self.reload(request_id).await;
    }

    fn report_in_alert(&self, request_id: Uuid, err: BackendError) -> ActionOutcome {
        tracing::warn!(view = %self.variant.name, %request_id, code = err.error_code(), "{}", err);
        self.dialogs.alert(&err.user_message());
        ActionOutcome::Failed(err)
    }

    fn report_in_message_box(&self, request_id: Uuid, err: BackendError) -> ActionOutcome {
        tracing::warn!(view = %self.variant.name, %request_id, code = err.error_code(), "{}", err);
        self.dialogs.message(&err.user_message(), Severity::Danger);
        ActionOutcome::Failed(err)
    }

    fn show_dialog(&self, header: &str) {
        self.dialogs.clear_message();
        if self.variant.flow == FormFlow::Dialog {
            self.dialogs.show_modal(&self.variant.dialog_id, header);
        }
    }

    fn hide_dialog(&self) {
        if self.variant.flow == FormFlow::Dialog {
            self.dialogs.hide_modal(&self.variant.dialog_id);
        }
    }

    fn read_form(&self) -> FolderForm {
        FolderForm {
            id: self.surface.field(FormField::Id),
            name: self.surface.field(FormField::Name),
            path: self.surface.field(FormField::Path),
        }
    }

    fn fill_form(&self, form: &FolderForm) {
        self.surface.set_field(FormField::Id, &form.id);
        self.surface.set_field(FormField::Name, &form.name);
        self.surface.set_field(FormField::Path, &form.path);
    }

    fn text(&self, key: &str) -> String {
        self.localizer.text(key)
    }
}
