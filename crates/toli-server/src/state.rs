use toli_config::Config;
use toli_core::EntryStore;
use tokio::sync::RwLock;

/// Shared per-process state handed to every request handler
pub struct AppState {
    pub config: Config,
    pub store: RwLock<EntryStore>,
}

impl AppState {
    pub fn new(config: Config, store: EntryStore) -> Self {
        Self {
            config,
            store: RwLock::new(store),
        }
    }

    /// Build the store from the embedded seed and any configured extra files.
    /// Runs before the server accepts requests.
    pub fn bootstrap(config: Config) -> anyhow::Result<Self> {
        let mut store = EntryStore::new();

        if config.dictionary.seed {
            toli_lang_mongolian::seed_store(&mut store)?;
        } else {
            tracing::warn!("Seeding disabled, starting with an empty dictionary");
        }

        let added = toli_lang_mongolian::load_additional(&mut store, &config.dictionary.additional_paths);
        if added > 0 {
            tracing::info!("Loaded {} additional entries", added);
        }

        tracing::info!("Dictionary ready with {} entries", store.len());
        Ok(Self::new(config, store))
    }
}
