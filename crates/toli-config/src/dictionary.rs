use std::env;

use serde::{Deserialize, Serialize};

fn default_seed() -> bool {
    true
}

fn default_search_limit() -> usize {
    20
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Insert the embedded bootstrap corpus at start-up
    #[serde(default = "default_seed")]
    pub seed: bool,
    /// Result cap used when a search request carries no limit
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
    /// Extra JSON entry files loaded after the seed
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            search_limit: default_search_limit(),
            additional_paths: vec![],
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let seed = env::var("TOLI_SEED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_seed);

        let search_limit = env::var("TOLI_SEARCH_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_search_limit);

        let additional_paths = env::var("TOLI_ADDITIONAL_DICTS")
            .map(|v| parse_path_list(&v))
            .unwrap_or_default();

        Self {
            seed,
            search_limit,
            additional_paths,
        }
    }
}

fn parse_path_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
