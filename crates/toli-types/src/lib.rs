pub mod types;

pub use types::{DictionaryEntry, EntryId, Example, NewEntry, Script, UnknownScript};
