//! The folder list variants and their fixed configuration.
//!
//! | Variant | Kind | Flow | Browsable |
//! |---------|------|------|-----------|
//! | `admin-audio` | audio | dialog | yes |
//! | `admin-picture` | picture | dialog | yes |
//! | `admin-video` | video | dialog | yes |
//! | `audio` | audio | inline | no |
//! | `picture` | picture | inline | no |

use std::fmt;

use crate::models::FolderKind;
use crate::template::{FOLDER_LIST_DIALOG, FOLDER_LIST_INLINE};

/// How the add/edit form is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFlow {
    /// Modal dialog opened by add/edit and closed by save/cancel.
    Dialog,
    /// Always-visible form below the list.
    Inline,
}

impl fmt::Display for FormFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormFlow::Dialog => write!(f, "dialog"),
            FormFlow::Inline => write!(f, "inline"),
        }
    }
}

/// Message keys of the localized labels a variant renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelKeys {
    pub title: String,
    pub description: Option<String>,
    pub add_title: Option<String>,
    pub update_title: Option<String>,
    pub remove_confirm: String,
    pub name: String,
    pub path: String,
    pub add: String,
    pub edit: String,
    pub remove: String,
    pub save: Option<String>,
    pub cancel: Option<String>,
}

/// CSS classes / element ids the rendered actions are bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTargets {
    pub add: String,
    pub edit: String,
    pub remove: String,
}

/// Everything that distinguishes one folder list view from another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewVariant {
    pub name: String,
    pub kind: FolderKind,
    pub flow: FormFlow,
    pub template: String,
    pub labels: LabelKeys,
    pub targets: ActionTargets,
    /// Id of the modal element; empty for inline variants.
    pub dialog_id: String,
    pub icon: Option<String>,
    pub browsable: bool,
}

impl ViewVariant {
    /// Names accepted by [`ViewVariant::by_name`], in display order.
    pub const NAMES: [&'static str; 5] = [
        "admin-audio",
        "admin-picture",
        "admin-video",
        "audio",
        "picture",
    ];

    pub fn admin_audio() -> Self {
        Self::admin(FolderKind::Audio, "music")
    }

    pub fn admin_picture() -> Self {
        Self::admin(FolderKind::Picture, "picture")
    }

    pub fn admin_video() -> Self {
        Self::admin(FolderKind::Video, "film")
    }

    pub fn audio() -> Self {
        Self::standalone(FolderKind::Audio)
    }

    pub fn picture() -> Self {
        Self::standalone(FolderKind::Picture)
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "admin-audio" => Some(Self::admin_audio()),
            "admin-picture" => Some(Self::admin_picture()),
            "admin-video" => Some(Self::admin_video()),
            "audio" => Some(Self::audio()),
            "picture" => Some(Self::picture()),
            _ => None,
        }
    }

    pub fn all() -> Vec<Self> {
        Self::NAMES.iter().filter_map(|name| Self::by_name(name)).collect()
    }

    /// Classes that get tooltips after every render.
    pub fn tooltip_targets(&self) -> Vec<String> {
        match self.flow {
            FormFlow::Dialog => vec![
                self.targets.edit.clone(),
                self.targets.remove.clone(),
                self.targets.add.clone(),
            ],
            FormFlow::Inline => Vec::new(),
        }
    }

    fn admin(kind: FolderKind, icon: &str) -> Self {
        let k = kind.as_str();
        let dialog_id = format!("{}Dlg", k);
        Self {
            name: format!("admin-{}", k),
            kind,
            flow: FormFlow::Dialog,
            template: FOLDER_LIST_DIALOG.to_string(),
            labels: LabelKeys {
                title: format!("msg.admin.{}.list.title", k),
                description: Some(format!("msg.admin.{}.list.description", k)),
                add_title: Some(format!("msg.admin.{}.add.title", k)),
                update_title: Some(format!("msg.admin.{}.update.title", k)),
                remove_confirm: format!("msg.admin.{}.remove.confirm", k),
                name: "msg.admin.name".to_string(),
                path: "msg.admin.path".to_string(),
                add: "msg.admin.add".to_string(),
                edit: "msg.admin.edit".to_string(),
                remove: "msg.admin.remove".to_string(),
                save: Some("msg.admin.save".to_string()),
                cancel: Some("msg.admin.cancel".to_string()),
            },
            targets: ActionTargets {
                add: format!("{}AddOpen", dialog_id),
                edit: format!("{}EditOpen", dialog_id),
                remove: format!("{}FolderRemove", k),
            },
            dialog_id,
            icon: Some(icon.to_string()),
            browsable: true,
        }
    }

    fn standalone(kind: FolderKind) -> Self {
        let k = kind.as_str();
        let noun = capitalize(k);
        Self {
            name: k.to_string(),
            kind,
            flow: FormFlow::Inline,
            template: FOLDER_LIST_INLINE.to_string(),
            labels: LabelKeys {
                title: format!("msg.{}.title", k),
                description: None,
                add_title: None,
                update_title: None,
                remove_confirm: format!("msg.{}.remove.confirm", k),
                name: "msg.name".to_string(),
                path: "msg.path".to_string(),
                add: "msg.add".to_string(),
                edit: "msg.edit".to_string(),
                remove: "msg.remove".to_string(),
                save: None,
                cancel: None,
            },
            targets: ActionTargets {
                add: format!("add{}Folder", noun),
                edit: format!("edit{}Folder", noun),
                remove: format!("remove{}Folder", noun),
            },
            dialog_id: String::new(),
            icon: None,
            browsable: false,
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for ViewVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} folders, {} form)", self.name, self.kind, self.flow)
    }
}
