use std::collections::HashMap;

use toli_types::{DictionaryEntry, EntryId, NewEntry};
use uuid::Uuid;

/// In-memory entry store.
///
/// Entries are kept in insertion order with a hash index by id. There is no
/// update or delete; an entry lives as long as the store.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<DictionaryEntry>,
    id_index: HashMap<EntryId, usize>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a fresh id to `entry`, store it and return the stored copy.
    /// Field validation is the caller's job.
    pub fn create(&mut self, entry: NewEntry) -> DictionaryEntry {
        let mut id = Uuid::new_v4();
        while self.id_index.contains_key(&id) {
            id = Uuid::new_v4();
        }

        let entry = DictionaryEntry::from_new(id, entry);
        self.id_index.insert(id, self.entries.len());
        self.entries.push(entry.clone());

        tracing::trace!("Created dictionary entry {}", id);
        entry
    }

    pub fn get(&self, id: &EntryId) -> Option<&DictionaryEntry> {
        self.id_index.get(id).and_then(|&idx| self.entries.get(idx))
    }

    /// Look up by the textual form of an id; malformed ids are simply absent
    pub fn get_by_str(&self, id: &str) -> Option<&DictionaryEntry> {
        Uuid::parse_str(id).ok().and_then(|id| self.get(&id))
    }

    /// All entries in insertion order
    pub fn all(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;

    use toli_types::Example;

    use super::*;

    pub(crate) fn new_entry(traditional: &str, cyrillic: &str, korean: &str, english: &str) -> NewEntry {
        NewEntry {
            mongolian_traditional: traditional.to_string(),
            mongolian_cyrillic: cyrillic.to_string(),
            korean: korean.to_string(),
            english: english.to_string(),
            pronunciation: "[테스트]".to_string(),
            part_of_speech: "명사".to_string(),
            examples: vec![],
        }
    }

    #[test]
    fn create_then_get_returns_inserted_data() {
        let mut store = EntryStore::new();
        let mut data = new_entry("ᠤᠰᠤ", "ус", "물", "water");
        data.examples.push(Example {
            mongolian_traditional: "ᠤᠰᠤ ᠴᠢᠩᠭᠡ ᠪᠠᠶᠢᠨ᠎ᠠ᠃".into(),
            mongolian_cyrillic: "Ус тунгалаг байна.".into(),
            korean: "물이 맑습니다.".into(),
            english: Some("The water is clear.".into()),
        });

        let created = store.create(data.clone());
        assert!(!created.id.is_nil());

        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched, &created);
        assert_eq!(fetched.mongolian_cyrillic, data.mongolian_cyrillic);
        assert_eq!(fetched.examples, data.examples);
        assert_eq!(store.get_by_str(&created.id.to_string()), Some(&created));
    }

    #[test]
    fn ids_are_pairwise_distinct() {
        let mut store = EntryStore::new();
        let ids: HashSet<EntryId> = (0..100)
            .map(|i| store.create(new_entry("ᠠ", &format!("а{i}"), "가", "a")).id)
            .collect();
        assert_eq!(ids.len(), 100);
        assert_eq!(store.len(), 100);
    }

    #[test]
    fn all_preserves_insertion_order() {
        let mut store = EntryStore::new();
        for word in ["морь", "ус", "авах"] {
            store.create(new_entry("ᠠ", word, "가", "a"));
        }
        let words: Vec<&str> = store.all().iter().map(|e| e.mongolian_cyrillic.as_str()).collect();
        assert_eq!(words, vec!["морь", "ус", "авах"]);
    }

    #[test]
    fn unknown_or_malformed_id_is_absent() {
        let mut store = EntryStore::new();
        store.create(new_entry("ᠤᠰᠤ", "ус", "물", "water"));
        assert!(store.get(&Uuid::new_v4()).is_none());
        assert!(store.get_by_str("not-a-uuid").is_none());
        assert!(EntryStore::new().is_empty());
    }
}
