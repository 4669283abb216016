//! Path picker collaborator.

use super::surface::FormField;

/// Secondary widget that helps fill a path field.
pub trait PathPicker: Send + Sync {
    /// Open the picker for `field`.
    fn show(&self, field: FormField);

    fn hide(&self);
}
