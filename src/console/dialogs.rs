//! Dialogs played in the terminal.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::cli_output::{format_alert_box, format_header, format_message_line};
use crate::traits::{Dialogs, Severity};

use super::io::{ConsoleOutput, LineSource};

#[derive(Debug, Default)]
struct DialogState {
    /// Open modal: dialog id and header.
    modal: Option<(String, String)>,
    message: Option<(String, Severity)>,
}

/// Modal headers, `[y/N]` confirmations, boxed alerts and a message line.
pub struct TerminalDialogs {
    input: LineSource,
    output: ConsoleOutput,
    state: Mutex<DialogState>,
}

impl TerminalDialogs {
    pub fn new(input: LineSource, output: ConsoleOutput) -> Self {
        Self {
            input,
            output,
            state: Mutex::new(DialogState::default()),
        }
    }

    /// Id and header of the open modal.
    pub fn open_modal(&self) -> Option<(String, String)> {
        self.lock().modal.clone()
    }

    pub fn current_message(&self) -> Option<(String, Severity)> {
        self.lock().message.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DialogState> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }
}

#[async_trait]
impl Dialogs for TerminalDialogs {
    fn show_modal(&self, dialog_id: &str, header: &str) {
        self.output.line(&format_header(header));
        self.output
            .line("  set name|path <value>, then save or close");
        self.lock().modal = Some((dialog_id.to_string(), header.to_string()));
    }

    fn hide_modal(&self, dialog_id: &str) {
        let mut state = self.lock();
        if state.modal.as_ref().map(|(id, _)| id.as_str()) == Some(dialog_id) {
            state.modal = None;
        }
    }

    async fn confirm(&self, prompt: &str) -> bool {
        self.output.prompt(&format!("{} [y/N] ", prompt));
        let answer = match self.input.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                self.output.line("");
                return false;
            }
            Err(e) => {
                tracing::warn!("confirmation input failed: {}", e);
                return false;
            }
        };
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn alert(&self, message: &str) {
        self.output.line(&format_alert_box(message));
    }

    fn message(&self, text: &str, severity: Severity) {
        self.output.line(&format_message_line(text, severity));
        self.lock().message = Some((text.to_string(), severity));
    }

    fn clear_message(&self) {
        self.lock().message = None;
    }
}
