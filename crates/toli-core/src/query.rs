//! Read-only views over an [`EntryStore`]: free-text search, first-letter
//! browse and headword ordering.
//!
//! `search` and `by_first_letter` return entries in store order. Only
//! [`sort_by_headword`] reorders.

use std::cmp::Ordering;

use toli_types::{DictionaryEntry, Script};

use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::projection::project_headword;
use crate::store::EntryStore;

pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Case-insensitive substring search over both headwords, both glosses and
/// the pronunciation. A blank query returns the first `limit` entries.
pub fn search(store: &EntryStore, query: &str, limit: usize) -> Vec<DictionaryEntry> {
    let needle = DefaultPreprocessor.process(query);

    if needle.is_empty() {
        return store.all().iter().take(limit).cloned().collect();
    }

    let results: Vec<DictionaryEntry> = store
        .all()
        .iter()
        .filter(|entry| matches_query(entry, &needle))
        .take(limit)
        .cloned()
        .collect();

    tracing::debug!("Search '{}' matched {} entries (limit {})", needle, results.len(), limit);
    results
}

fn matches_query(entry: &DictionaryEntry, needle: &str) -> bool {
    [
        &entry.mongolian_traditional,
        &entry.mongolian_cyrillic,
        &entry.korean,
        &entry.english,
        &entry.pronunciation,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Entries whose headword in `script` starts with `letter`, compared one
/// character at a time after lowercasing.
pub fn by_first_letter(store: &EntryStore, letter: &str, script: Script) -> Vec<DictionaryEntry> {
    let wanted = letter.to_lowercase();

    let results: Vec<DictionaryEntry> = store
        .all()
        .iter()
        .filter(|entry| {
            project_headword(entry, script)
                .chars()
                .next()
                .is_some_and(|first| first.to_lowercase().eq(wanted.chars()))
        })
        .cloned()
        .collect();

    tracing::debug!("Letter '{}' ({}) matched {} entries", letter, script, results.len());
    results
}

/// Stable ascending sort on the traditional-script headword
pub fn sort_by_headword(entries: &[DictionaryEntry]) -> Vec<DictionaryEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| compare_headwords(&a.mongolian_traditional, &b.mongolian_traditional));
    sorted
}

fn compare_headwords(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
