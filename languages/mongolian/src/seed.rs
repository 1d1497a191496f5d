use std::path::Path;

use toli_core::{EntryStore, LoadError};

use crate::loader::EntryLoader;

/// Insert the bootstrap corpus into `store`.
///
/// Meant to run once before the store is shared; a second call inserts
/// every entry again under new ids.
pub fn seed_store(store: &mut EntryStore) -> Result<usize, LoadError> {
    let entries = EntryLoader::load_embedded()?;
    let count = entries.len();
    for entry in entries {
        store.create(entry);
    }
    tracing::info!("Seeded {} dictionary entries", count);
    Ok(count)
}

/// Insert entries from extra JSON files. Files that fail to load are skipped.
pub fn load_additional(store: &mut EntryStore, paths: &[String]) -> usize {
    let mut total = 0;
    for path in paths {
        match EntryLoader::load_from_file(Path::new(path)) {
            Ok(entries) => {
                tracing::info!("Merging {} entries from: {}", entries.len(), path);
                total += entries.len();
                for entry in entries {
                    store.create(entry);
                }
            }
            Err(e) => {
                tracing::warn!("Failed to load dictionary from {}: {}", path, e);
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use toli_core::{by_first_letter, project_headword, search, sort_by_headword};
    use toli_types::Script;
    use uuid::Uuid;

    use super::*;
    use crate::alphabet::alphabet;

    fn seeded() -> EntryStore {
        let mut store = EntryStore::new();
        seed_store(&mut store).unwrap();
        store
    }

    #[test]
    fn seed_inserts_seven_entries() {
        let store = seeded();
        assert_eq!(store.len(), 7);
        assert_eq!(store.all()[0].mongolian_cyrillic, "Монгол улс");
    }

    #[test]
    fn korean_search_finds_sun() {
        let store = seeded();
        let results = search(&store, "해", 20);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].english, "sun");
    }

    #[test]
    fn traditional_letter_browse() {
        let store = seeded();
        let headwords: Vec<String> = by_first_letter(&store, "ᠮ", Script::Traditional)
            .into_iter()
            .map(|e| e.mongolian_traditional)
            .collect();
        assert_eq!(headwords, vec!["ᠮᠤᠩᠭᠤᠯ ᠤᠯᠤᠰ", "ᠮᠤᠷᠢ"]);
    }

    #[test]
    fn cyrillic_letter_browse_ignores_case() {
        let store = seeded();
        let results = by_first_letter(&store, "Х", Script::Cyrillic);
        let words: Vec<&str> = results.iter().map(|e| e.mongolian_cyrillic.as_str()).collect();
        assert_eq!(words, vec!["хүрэх", "хөөрхөн"]);
    }

    #[test]
    fn every_seed_headword_is_reachable_from_its_alphabet() {
        let store = seeded();
        for script in [Script::Traditional, Script::Cyrillic] {
            let letters = alphabet(script);
            for entry in store.all() {
                let first: String = project_headword(entry, script)
                    .chars()
                    .next()
                    .unwrap()
                    .to_lowercase()
                    .collect();
                assert!(letters.contains(&first.as_str()), "{first} missing from {script} alphabet");
                assert!(!by_first_letter(&store, &first, script).is_empty());
            }
        }
    }

    #[test]
    fn unknown_id_is_absent() {
        let store = seeded();
        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn browse_sort_starts_with_a() {
        let store = seeded();
        let sorted = sort_by_headword(store.all());
        assert_eq!(sorted[0].mongolian_cyrillic, "авах");
        assert_eq!(sorted.len(), 7);
    }

    #[test]
    fn seeding_twice_duplicates() {
        let mut store = seeded();
        seed_store(&mut store).unwrap();
        assert_eq!(store.len(), 14);
    }

    #[test]
    fn unreadable_additional_files_are_skipped() {
        let mut store = seeded();
        let added = load_additional(&mut store, &["/nonexistent/extra.json".to_string()]);
        assert_eq!(added, 0);
        assert_eq!(store.len(), 7);
    }
}
