//! The region a view renders into, and the form fields around it.

use std::fmt;

/// Free-text inputs of the add/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Id,
    Name,
    Path,
}

impl FormField {
    /// Element id of the field in the rendered markup.
    pub fn element_id(&self) -> &'static str {
        match self {
            FormField::Id => "folderId",
            FormField::Name => "folderName",
            FormField::Path => "folderPath",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// Render target of one view.
///
/// Replacing the content drops every widget bound to the previous markup,
/// so tooltips are attached again after each replacement.
pub trait Surface: Send + Sync {
    /// Name of the region, used by hosts that show several views.
    fn region(&self) -> &str;

    fn replace_html(&self, html: &str);

    /// Attach tooltips to every element carrying one of the given classes.
    fn attach_tooltips(&self, targets: &[String]);

    fn field(&self, field: FormField) -> String;

    fn set_field(&self, field: FormField, value: &str);
}
