use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned entry identifier
pub type EntryId = Uuid;

/// Writing system used to display a headword
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Traditional (vertical) Mongolian script
    #[default]
    Traditional,
    /// Cyrillic Mongolian
    Cyrillic,
}

impl Script {
    pub fn as_str(&self) -> &'static str {
        match self {
            Script::Traditional => "traditional",
            Script::Cyrillic => "cyrillic",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown script: {0}")]
pub struct UnknownScript(pub String);

impl FromStr for Script {
    type Err = UnknownScript;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "traditional" => Ok(Script::Traditional),
            "cyrillic" => Ok(Script::Cyrillic),
            _ => Err(UnknownScript(s.to_string())),
        }
    }
}

/// Usage example attached to an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub mongolian_traditional: String,
    pub mongolian_cyrillic: String,
    pub korean: String,
    /// Not every example carries an English translation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
}

/// Entry fields as supplied by a caller, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub mongolian_traditional: String,
    pub mongolian_cyrillic: String,
    pub korean: String,
    pub english: String,
    pub pronunciation: String, // e.g. "[나란]"
    pub part_of_speech: String, // e.g. "명사"
    #[serde(default)]
    pub examples: Vec<Example>,
}

/// Dictionary entry as held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub id: EntryId,
    pub mongolian_traditional: String,
    pub mongolian_cyrillic: String,
    pub korean: String,
    pub english: String,
    pub pronunciation: String,
    pub part_of_speech: String,
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl DictionaryEntry {
    pub fn from_new(id: EntryId, entry: NewEntry) -> Self {
        let NewEntry {
            mongolian_traditional,
            mongolian_cyrillic,
            korean,
            english,
            pronunciation,
            part_of_speech,
            examples,
        } = entry;

        Self {
            id,
            mongolian_traditional,
            mongolian_cyrillic,
            korean,
            english,
            pronunciation,
            part_of_speech,
            examples,
        }
    }
}
