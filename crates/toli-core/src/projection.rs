use serde::Serialize;
use toli_types::{DictionaryEntry, EntryId, Example, Script};

/// Headword of `entry` in the selected script
pub fn project_headword(entry: &DictionaryEntry, script: Script) -> &str {
    match script {
        Script::Traditional => &entry.mongolian_traditional,
        Script::Cyrillic => &entry.mongolian_cyrillic,
    }
}

/// Example sentence in the selected script
pub fn project_example(example: &Example, script: Script) -> &str {
    match script {
        Script::Traditional => &example.mongolian_traditional,
        Script::Cyrillic => &example.mongolian_cyrillic,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayExample {
    pub text: String,
    pub korean: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
}

/// Entry as shown to a reader who picked one script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEntry {
    pub id: EntryId,
    pub script: Script,
    pub headword: String,
    pub pronunciation: String,
    pub korean: String,
    pub english: String,
    pub part_of_speech: String,
    pub examples: Vec<DisplayExample>,
}

impl DisplayEntry {
    pub fn project(entry: &DictionaryEntry, script: Script) -> Self {
        Self {
            id: entry.id,
            script,
            headword: project_headword(entry, script).to_string(),
            pronunciation: entry.pronunciation.clone(),
            korean: entry.korean.clone(),
            english: entry.english.clone(),
            part_of_speech: entry.part_of_speech.clone(),
            examples: entry
                .examples
                .iter()
                .map(|ex| DisplayExample {
                    text: project_example(ex, script).to_string(),
                    korean: ex.korean.clone(),
                    english: ex.english.clone(),
                })
                .collect(),
        }
    }
}
