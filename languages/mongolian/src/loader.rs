use std::path::Path;

use toli_core::LoadError;
use toli_types::NewEntry;

pub struct EntryLoader;

impl EntryLoader {
    /// Bootstrap corpus shipped with the crate
    pub fn load_embedded() -> Result<Vec<NewEntry>, LoadError> {
        let json = include_str!("../data/seed.json");
        Self::from_json(json)
    }

    /// Load a JSON array of entries from disk
    pub fn load_from_file(path: &Path) -> Result<Vec<NewEntry>, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        tracing::info!("Loading dictionary entries from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Vec<NewEntry>, LoadError> {
        Ok(serde_json::from_str(json)?)
    }
}
