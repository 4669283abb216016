//! Localized user-facing text.
//!
//! Views never hold literal strings; every title, label and prompt is looked
//! up by key through a [`crate::traits::Localizer`].

mod bundle;
mod messages;

pub use bundle::MessageBundle;

use once_cell::sync::Lazy;
use regex::Regex;

static LOCALE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{2,3}(_[A-Z]{2})?$").expect("Invalid locale regex pattern"));

/// Check a locale tag such as `fr` or `fr_CA`.
pub fn is_valid_locale(locale: &str) -> bool {
    LOCALE_REGEX.is_match(locale)
}
