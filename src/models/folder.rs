use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Helper to deserialize an optional id given either as a string or an integer.
///
/// The Holmes backend sends ids as strings, but older fixtures and some
/// proxies hand them back as plain numbers.
fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, an integer or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// The media category a folder is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderKind {
    Audio,
    Picture,
    Video,
}

impl FolderKind {
    pub const ALL: [FolderKind; 3] = [FolderKind::Audio, FolderKind::Picture, FolderKind::Video];

    /// Name of the REST collection serving this kind of folder.
    pub fn resource(&self) -> &'static str {
        match self {
            FolderKind::Audio => "audioFolders",
            FolderKind::Picture => "pictureFolders",
            FolderKind::Video => "videoFolders",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FolderKind::Audio => "audio",
            FolderKind::Picture => "picture",
            FolderKind::Video => "video",
        }
    }
}

impl fmt::Display for FolderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FolderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "audio" => Ok(FolderKind::Audio),
            "picture" => Ok(FolderKind::Picture),
            "video" => Ok(FolderKind::Video),
            other => Err(format!("unknown folder kind: {}", other)),
        }
    }
}

/// A named filesystem path registered with the media server for indexing.
///
/// `id` is `None` until the backend has stored the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolderRecord {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
}

impl FolderRecord {
    /// Build a record that has not been stored yet. Name and path are trimmed.
    pub fn unsaved(name: &str, path: &str) -> Self {
        Self {
            id: None,
            name: name.trim().to_string(),
            path: path.trim().to_string(),
        }
    }

    /// Build a record for an existing id. Name and path are trimmed.
    pub fn existing(id: impl Into<String>, name: &str, path: &str) -> Self {
        Self {
            id: Some(id.into()),
            name: name.trim().to_string(),
            path: path.trim().to_string(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

/// The free-text fields of the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderForm {
    pub id: String,
    pub name: String,
    pub path: String,
}

impl FolderForm {
    pub fn from_record(record: &FolderRecord) -> Self {
        Self {
            id: record.id.clone().unwrap_or_default(),
            name: record.name.clone(),
            path: record.path.clone(),
        }
    }

    /// Turn the form into the record to submit.
    ///
    /// An empty id means the record is new.
    pub fn to_record(&self) -> FolderRecord {
        let id = self.id.trim();
        if id.is_empty() {
            FolderRecord::unsaved(&self.name, &self.path)
        } else {
            FolderRecord::existing(id, &self.name, &self.path)
        }
    }
}
