//! Folder list views.
//!
//! One generalized [`FolderListView`] covers every variant; a
//! [`ViewVariant`] carries what differs between them (folder kind, form flow,
//! template, label keys, action targets).

mod folder_list;
mod outcome;
mod variant;

pub use folder_list::{FolderListView, ViewCollaborators};
pub use outcome::ActionOutcome;
pub use variant::{ActionTargets, FormFlow, LabelKeys, ViewVariant};
