//! What a view action did.

use std::fmt;

use crate::error::BackendError;
use crate::models::FolderRecord;

/// Result of one user action on a folder list view.
///
/// Failures are already reported to the user (alert or message box) by the
/// time the outcome is returned.
#[derive(Debug, Clone)]
pub enum ActionOutcome {
    /// The add/edit form was opened (or, inline, reset and populated).
    DialogOpened,
    Closed,
    PickerShown,
    Created(FolderRecord),
    Updated(FolderRecord),
    Removed(String),
    /// The collection was reloaded with this many records.
    Refreshed(usize),
    /// The user declined the confirmation; nothing was sent.
    Declined,
    Failed(BackendError),
    /// The action does not apply to this variant.
    Ignored,
}

impl ActionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ActionOutcome::Failed(_))
    }

    /// True for outcomes that changed data on the server.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            ActionOutcome::Created(_) | ActionOutcome::Updated(_) | ActionOutcome::Removed(_)
        )
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::DialogOpened => write!(f, "form opened"),
            ActionOutcome::Closed => write!(f, "form closed"),
            ActionOutcome::PickerShown => write!(f, "path picker opened"),
            ActionOutcome::Created(record) => write!(
                f,
                "created folder {} ({})",
                record.id.as_deref().unwrap_or("?"),
                record.name
            ),
            ActionOutcome::Updated(record) => write!(
                f,
                "updated folder {} ({})",
                record.id.as_deref().unwrap_or("?"),
                record.name
            ),
            ActionOutcome::Removed(id) => write!(f, "removed folder {}", id),
            ActionOutcome::Refreshed(count) => write!(f, "{} folder(s) loaded", count),
            ActionOutcome::Declined => write!(f, "cancelled"),
            ActionOutcome::Failed(err) => write!(f, "failed: {}", err.user_message()),
            ActionOutcome::Ignored => write!(f, "not available in this view"),
        }
    }
}
