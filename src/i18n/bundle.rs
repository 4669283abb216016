//! `.properties` message bundles.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{AdminError, BundleError, ConfigError};
use crate::traits::Localizer;

use super::messages::DEFAULT_MESSAGES;

/// Localized messages keyed by their fixed identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBundle {
    messages: HashMap<String, String>,
}

impl MessageBundle {
    /// Parse Java `.properties` text.
    ///
    /// Handles `=`, `:` and whitespace separators, `#`/`!` comments,
    /// backslash line continuations and the usual escapes including `\uXXXX`.
    pub fn parse(source: &str) -> Result<Self, BundleError> {
        let mut messages = HashMap::new();
        let mut lines = source.lines().enumerate();

        while let Some((index, raw)) = lines.next() {
            let line_no = index + 1;
            let trimmed = raw.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }

            let mut logical = trimmed.to_string();
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some((_, next)) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }

            let (key, value) = split_entry(&logical);
            messages.insert(unescape(key, line_no)?, unescape(value, line_no)?);
        }

        Ok(Self { messages })
    }

    /// The English messages compiled into the binary.
    pub fn embedded() -> Self {
        Self::parse(DEFAULT_MESSAGES).unwrap_or_default()
    }

    /// Embedded messages overlaid with `messages.properties`, then
    /// `messages_<lang>.properties`, then `messages_<locale>.properties` from
    /// `dir`. Missing files are skipped.
    pub fn load(dir: &Path, locale: Option<&str>) -> Result<Self, AdminError> {
        let mut bundle = Self::embedded();

        let mut candidates = vec!["messages.properties".to_string()];
        if let Some(locale) = locale {
            if let Some((lang, _)) = locale.split_once('_') {
                candidates.push(format!("messages_{}.properties", lang));
            }
            candidates.push(format!("messages_{}.properties", locale));
        }

        for file in candidates {
            let path = dir.join(&file);
            if !path.is_file() {
                continue;
            }
            let source = std::fs::read_to_string(&path).map_err(|source| {
                ConfigError::Unreadable {
                    path: path.clone(),
                    source,
                }
            })?;
            let overlay = Self::parse(&source)?;
            tracing::debug!(path = %path.display(), entries = overlay.len(), "loaded message bundle");
            bundle.merge(overlay);
        }

        Ok(bundle)
    }

    /// Overlay `other` on top of this bundle.
    pub fn merge(&mut self, other: MessageBundle) {
        self.messages.extend(other.messages);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Localizer for MessageBundle {
    fn text(&self, key: &str) -> String {
        match self.get(key) {
            Some(text) => text.to_string(),
            None => format!("[{}]", key),
        }
    }
}

/// True when the line ends with an odd number of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let rest = line[key_end..].trim_start_matches([' ', '\t']);
    let rest = rest
        .strip_prefix('=')
        .or_else(|| rest.strip_prefix(':'))
        .unwrap_or(rest);
    (key, rest.trim_start_matches([' ', '\t']))
}

fn unescape(text: &str, line: usize) -> Result<String, BundleError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = if hex.len() == 4 {
                    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
                } else {
                    None
                };
                out.push(decoded.ok_or(BundleError::MalformedEscape { line })?);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_bundle_has_view_keys() {
        let bundle = MessageBundle::embedded();
        assert_eq!(bundle.text("msg.admin.audio.list.title"), "Audio folders");
        assert_eq!(bundle.text("msg.picture.title"), "Picture folders");
        assert_eq!(
            bundle.text("msg.admin.video.remove.confirm"),
            "Remove this video folder?"
        );
    }

    #[test]
    fn test_missing_key_is_bracketed() {
        let bundle = MessageBundle::default();
        assert_eq!(bundle.text("msg.unknown"), "[msg.unknown]");
    }

    #[test]
    fn test_separators_and_comments() {
        let bundle = MessageBundle::parse(
            "# comment\n! other comment\n\na=1\nb : 2\nc 3\n  d=  spaced value\n",
        )
        .unwrap();
        assert_eq!(bundle.get("a"), Some("1"));
        assert_eq!(bundle.get("b"), Some("2"));
        assert_eq!(bundle.get("c"), Some("3"));
        assert_eq!(bundle.get("d"), Some("spaced value"));
        assert_eq!(bundle.len(), 4);
    }

    #[test]
    fn test_escapes_and_continuation() {
        let bundle = MessageBundle::parse(
            "title=Dossiers \\u00e0 indexer\nlong=first \\\n    second\nkey\\=with=eq\ntab=a\\tb\n",
        )
        .unwrap();
        assert_eq!(bundle.get("title"), Some("Dossiers à indexer"));
        assert_eq!(bundle.get("long"), Some("first second"));
        assert_eq!(bundle.get("key=with"), Some("eq"));
        assert_eq!(bundle.get("tab"), Some("a\tb"));
    }

    #[test]
    fn test_escaped_backslash_is_not_continuation() {
        let bundle = MessageBundle::parse("path=C:\\\\\nnext=1\n").unwrap();
        assert_eq!(bundle.get("path"), Some("C:\\"));
        assert_eq!(bundle.get("next"), Some("1"));
    }

    #[test]
    fn test_malformed_unicode_escape() {
        let err = MessageBundle::parse("ok=1\nbad=\\u12\n").unwrap_err();
        assert_eq!(err, BundleError::MalformedEscape { line: 2 });
    }

    #[test]
    fn test_load_overlays_locale_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("messages_fr.properties"),
            "msg.admin.audio.list.title=Dossiers audio\nmsg.admin.save=Enregistrer\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("messages_fr_CA.properties"),
            "msg.admin.save=Sauvegarder\n",
        )
        .unwrap();

        let bundle = MessageBundle::load(dir.path(), Some("fr_CA")).unwrap();
        assert_eq!(bundle.text("msg.admin.audio.list.title"), "Dossiers audio");
        assert_eq!(bundle.text("msg.admin.save"), "Sauvegarder");
        assert_eq!(bundle.text("msg.admin.cancel"), "Cancel");
    }

    #[test]
    fn test_load_without_files_is_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = MessageBundle::load(dir.path(), Some("de")).unwrap();
        assert_eq!(bundle, MessageBundle::embedded());
    }
}
