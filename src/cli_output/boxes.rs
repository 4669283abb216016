//! Simple line-based console output.
//!
//! Every `print_*` function has a `format_*` twin returning the text, which
//! is what the tests look at.

use unicode_width::UnicodeWidthStr;

use crate::models::FolderRecord;
use crate::traits::Severity;

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Status icons
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const INFO: &str = "•";
}

/// Print a section header.
///
/// ```text
/// AUDIO FOLDERS
/// ════════════════════════════════════════════════════════════
/// ```
pub fn print_header(title: &str) {
    println!("{}", format_header(title));
}

pub fn format_header(title: &str) -> String {
    format!("\n{}\n{}", title.to_uppercase(), "═".repeat(LINE_WIDTH))
}

/// Print a blocking alert.
///
/// ```text
/// ┌──────────────────┐
/// │ ✗ Unknown folder │
/// └──────────────────┘
/// ```
pub fn print_alert_box(message: &str) {
    println!("{}", format_alert_box(message));
}

pub fn format_alert_box(message: &str) -> String {
    let lines: Vec<String> = message
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{} {}", icons::FAILURE, line)
            } else {
                format!("  {}", line)
            }
        })
        .collect();
    let lines = if lines.is_empty() {
        vec![icons::FAILURE.to_string()]
    } else {
        lines
    };
    let width = lines.iter().map(|l| l.width()).max().unwrap_or(0);

    let mut out = format!("┌{}┐\n", "─".repeat(width + 2));
    for line in &lines {
        out.push_str(&format!("│ {} │\n", pad(line, width)));
    }
    out.push_str(&format!("└{}┘", "─".repeat(width + 2)));
    out
}

/// Print a message box line tagged with its severity.
///
/// ```text
///   ✗ [danger] Path not found
/// ```
pub fn print_message_line(text: &str, severity: Severity) {
    println!("{}", format_message_line(text, severity));
}

pub fn format_message_line(text: &str, severity: Severity) -> String {
    let icon = match severity {
        Severity::Success => icons::SUCCESS,
        Severity::Danger => icons::FAILURE,
        Severity::Warning => icons::WARNING,
        Severity::Info => icons::INFO,
    };
    format!("  {} [{}] {}", icon, severity, text)
}

/// Print a line within a section.
pub fn print_step_line(icon: &str, message: &str) {
    println!("  {} {}", icon, message);
}

/// Print the folders as an aligned table.
///
/// ```text
///   ID  NAME   PATH
///   1   Music  /mnt/music
/// ```
pub fn print_folder_table(headers: [&str; 3], records: &[FolderRecord]) {
    println!("{}", format_folder_table(headers, records));
}

pub fn format_folder_table(headers: [&str; 3], records: &[FolderRecord]) -> String {
    let rows: Vec<[&str; 3]> = records
        .iter()
        .map(|r| [r.id.as_deref().unwrap_or("-"), r.name.as_str(), r.path.as_str()])
        .collect();

    let mut widths = headers.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let format_row = |cells: [&str; 3]| -> String {
        let line = format!(
            "  {}  {}  {}",
            pad(cells[0], widths[0]),
            pad(cells[1], widths[1]),
            cells[2]
        );
        line.trim_end().to_string()
    };

    let mut out = format_row(headers);
    if rows.is_empty() {
        out.push_str("\n  (no folders)");
    }
    for row in rows {
        out.push('\n');
        out.push_str(&format_row(row));
    }
    out
}

/// Pad `text` with spaces to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
