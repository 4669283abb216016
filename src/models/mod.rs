mod folder;

pub use folder::{FolderForm, FolderKind, FolderRecord};
