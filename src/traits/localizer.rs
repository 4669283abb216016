//! Localization collaborator.

/// Key to user-facing text lookup.
///
/// Implementations return `[key]` for keys they do not know.
pub trait Localizer: Send + Sync {
    fn text(&self, key: &str) -> String;
}
