//! Dialog and notification collaborators.

use async_trait::async_trait;
use std::fmt;

/// Severity tag of a message box entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modal dialogs, confirmations, alerts and the inline message box.
///
/// `confirm` is the only call that waits for the user.
#[async_trait]
pub trait Dialogs: Send + Sync {
    /// Show the modal `dialog_id` with the given header text.
    fn show_modal(&self, dialog_id: &str, header: &str);

    fn hide_modal(&self, dialog_id: &str);

    /// Ask a yes/no question. `true` only on an explicit yes.
    async fn confirm(&self, prompt: &str) -> bool;

    /// Blocking alert.
    fn alert(&self, message: &str);

    /// Non-blocking message next to the form actions.
    fn message(&self, text: &str, severity: Severity);

    fn clear_message(&self);
}
