//! Console render region.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::preview::PreviewHub;
use crate::traits::{FormField, Surface};

#[derive(Debug, Default)]
struct RegionState {
    html: String,
    tooltips: Vec<String>,
    fields: HashMap<FormField, String>,
}

/// Region of one view. Rendered markup is kept for `show` and published to
/// the preview hub when there is one.
pub struct ConsoleSurface {
    region: String,
    hub: Option<PreviewHub>,
    state: Mutex<RegionState>,
}

impl ConsoleSurface {
    pub fn new(region: &str, hub: Option<PreviewHub>) -> Self {
        Self {
            region: region.to_string(),
            hub,
            state: Mutex::new(RegionState::default()),
        }
    }

    pub fn html(&self) -> String {
        self.lock().html.clone()
    }

    pub fn tooltip_targets(&self) -> Vec<String> {
        self.lock().tooltips.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RegionState> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl Surface for ConsoleSurface {
    fn region(&self) -> &str {
        &self.region
    }

    fn replace_html(&self, html: &str) {
        self.lock().html = html.to_string();
        if let Some(hub) = &self.hub {
            let snapshot = hub.publish(&self.region, html);
            tracing::debug!(region = %self.region, revision = snapshot.revision, "published region");
        }
    }

    fn attach_tooltips(&self, targets: &[String]) {
        self.lock().tooltips = targets.to_vec();
    }

    fn field(&self, field: FormField) -> String {
        self.lock().fields.get(&field).cloned().unwrap_or_default()
    }

    fn set_field(&self, field: FormField, value: &str) {
        self.lock().fields.insert(field, value.to_string());
    }
}
