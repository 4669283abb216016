//! Recording doubles for the view collaborators.
//!
//! Each double keeps its state behind `Arc<Mutex<..>>` so a clone can be
//! handed to a view while the test keeps another one to inspect.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Dialogs, FormField, PathPicker, Severity, Surface};

/// A call received by [`RecordingDialogs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    ShowModal { dialog_id: String, header: String },
    HideModal(String),
    Confirm(String),
    Alert(String),
    Message { text: String, severity: Severity },
    ClearMessage,
}

#[derive(Debug, Default)]
struct DialogState {
    events: Vec<DialogEvent>,
    confirm_answer: bool,
    open_modal: Option<String>,
    message: Option<(String, Severity)>,
}

/// Dialogs that answer confirmations with a preset value.
///
/// Confirmations are declined unless [`RecordingDialogs::answer_yes`] is
/// called.
#[derive(Debug, Clone, Default)]
pub struct RecordingDialogs {
    state: Arc<Mutex<DialogState>>,
}

impl RecordingDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_yes(&self) {
        self.state.lock().unwrap().confirm_answer = true;
    }

    pub fn answer_no(&self) {
        self.state.lock().unwrap().confirm_answer = false;
    }

    pub fn events(&self) -> Vec<DialogEvent> {
        self.state.lock().unwrap().events.clone()
    }

    /// Id of the modal currently shown, if any.
    pub fn modal_open(&self) -> Option<String> {
        self.state.lock().unwrap().open_modal.clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                DialogEvent::Alert(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                DialogEvent::Confirm(prompt) => Some(prompt),
                _ => None,
            })
            .collect()
    }

    /// Header of the last modal shown.
    pub fn last_header(&self) -> Option<String> {
        self.events().into_iter().rev().find_map(|event| match event {
            DialogEvent::ShowModal { header, .. } => Some(header),
            _ => None,
        })
    }

    /// Content of the message box, `None` once cleared.
    pub fn current_message(&self) -> Option<(String, Severity)> {
        self.state.lock().unwrap().message.clone()
    }

    pub fn clear_events(&self) {
        self.state.lock().unwrap().events.clear();
    }

    fn push(&self, event: DialogEvent) {
        self.state.lock().unwrap().events.push(event);
    }
}

#[async_trait]
impl Dialogs for RecordingDialogs {
    fn show_modal(&self, dialog_id: &str, header: &str) {
        self.push(DialogEvent::ShowModal {
            dialog_id: dialog_id.to_string(),
            header: header.to_string(),
        });
        self.state.lock().unwrap().open_modal = Some(dialog_id.to_string());
    }

    fn hide_modal(&self, dialog_id: &str) {
        self.push(DialogEvent::HideModal(dialog_id.to_string()));
        let mut state = self.state.lock().unwrap();
        if state.open_modal.as_deref() == Some(dialog_id) {
            state.open_modal = None;
        }
    }

    async fn confirm(&self, prompt: &str) -> bool {
        self.push(DialogEvent::Confirm(prompt.to_string()));
        self.state.lock().unwrap().confirm_answer
    }

    fn alert(&self, message: &str) {
        self.push(DialogEvent::Alert(message.to_string()));
    }

    fn message(&self, text: &str, severity: Severity) {
        self.push(DialogEvent::Message {
            text: text.to_string(),
            severity,
        });
        self.state.lock().unwrap().message = Some((text.to_string(), severity));
    }

    fn clear_message(&self) {
        self.push(DialogEvent::ClearMessage);
        self.state.lock().unwrap().message = None;
    }
}

#[derive(Debug, Default)]
struct SurfaceState {
    html: String,
    renders: usize,
    tooltips: Vec<String>,
    fields: HashMap<FormField, String>,
}

/// Surface keeping the last rendered markup and field values in memory.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    region: String,
    state: Arc<Mutex<SurfaceState>>,
}

impl MemorySurface {
    pub fn new(region: &str) -> Self {
        Self {
            region: region.to_string(),
            state: Arc::new(Mutex::new(SurfaceState::default())),
        }
    }

    pub fn html(&self) -> String {
        self.state.lock().unwrap().html.clone()
    }

    /// Number of times the content was replaced.
    pub fn render_count(&self) -> usize {
        self.state.lock().unwrap().renders
    }

    /// Tooltip targets of the last attachment.
    pub fn tooltip_targets(&self) -> Vec<String> {
        self.state.lock().unwrap().tooltips.clone()
    }
}

impl Surface for MemorySurface {
    fn region(&self) -> &str {
        &self.region
    }

    fn replace_html(&self, html: &str) {
        let mut state = self.state.lock().unwrap();
        state.html = html.to_string();
        state.renders += 1;
    }

    fn attach_tooltips(&self, targets: &[String]) {
        self.state.lock().unwrap().tooltips = targets.to_vec();
    }

    fn field(&self, field: FormField) -> String {
        self.state
            .lock()
            .unwrap()
            .fields
            .get(&field)
            .cloned()
            .unwrap_or_default()
    }

    fn set_field(&self, field: FormField, value: &str) {
        self.state
            .lock()
            .unwrap()
            .fields
            .insert(field, value.to_string());
    }
}

/// Path picker remembering whether it is open and for which field.
#[derive(Debug, Clone, Default)]
pub struct RecordingPicker {
    shown_for: Arc<Mutex<Option<FormField>>>,
    opened: Arc<Mutex<usize>>,
}

impl RecordingPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown_for(&self) -> Option<FormField> {
        *self.shown_for.lock().unwrap()
    }

    pub fn open_count(&self) -> usize {
        *self.opened.lock().unwrap()
    }
}

impl PathPicker for RecordingPicker {
    fn show(&self, field: FormField) {
        *self.shown_for.lock().unwrap() = Some(field);
        *self.opened.lock().unwrap() += 1;
    }

    fn hide(&self) {
        *self.shown_for.lock().unwrap() = None;
    }
}
