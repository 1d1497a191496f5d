use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use toli_core::preprocess::{parse_limit, validate_entry};
use toli_core::{DisplayEntry, QueryError, by_first_letter, search, sort_by_headword};
use toli_types::{DictionaryEntry, NewEntry, Script};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScriptParams {
    pub script: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BrowseParams {
    pub letter: Option<String>,
    pub script: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AlphabetResponse {
    pub script: Script,
    pub letters: Vec<String>,
}

/// Absent script means traditional; anything unrecognized is rejected
fn parse_script(raw: Option<&str>) -> Result<Script, QueryError> {
    match raw {
        None => Ok(Script::default()),
        Some(value) => Ok(value.parse()?),
    }
}

pub async fn search_entries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<DictionaryEntry>>> {
    let limit = parse_limit(params.limit.as_deref(), state.config.dictionary.search_limit)?;
    let query = params.q.unwrap_or_default();

    let store = state.store.read().await;
    Ok(Json(search(&store, &query, limit)))
}

pub async fn entries_by_letter(
    State(state): State<Arc<AppState>>,
    Path(letter): Path<String>,
    Query(params): Query<ScriptParams>,
) -> ApiResult<Json<Vec<DictionaryEntry>>> {
    let script = parse_script(params.script.as_deref())?;

    let store = state.store.read().await;
    Ok(Json(by_first_letter(&store, &letter, script)))
}

pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DictionaryEntry>> {
    let store = state.store.read().await;
    store
        .get_by_str(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Dictionary entry not found"))
}

pub async fn list_entries(State(state): State<Arc<AppState>>) -> Json<Vec<DictionaryEntry>> {
    let store = state.store.read().await;
    Json(store.all().to_vec())
}

pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewEntry>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DictionaryEntry>)> {
    let Json(entry) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    validate_entry(&entry)?;

    let created = state.store.write().await.create(entry);
    tracing::info!("Created entry {} ({})", created.id, created.mongolian_cyrillic);
    Ok((StatusCode::CREATED, Json(created)))
}

/// Alphabet-browse view: optional first-letter filter, sorted by headword,
/// projected into the requested script
pub async fn browse_entries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BrowseParams>,
) -> ApiResult<Json<Vec<DisplayEntry>>> {
    let script = parse_script(params.script.as_deref())?;

    let entries = {
        let store = state.store.read().await;
        match params.letter.as_deref().filter(|l| !l.is_empty()) {
            Some(letter) => by_first_letter(&store, letter, script),
            None => store.all().to_vec(),
        }
    };

    let view = sort_by_headword(&entries)
        .iter()
        .map(|entry| DisplayEntry::project(entry, script))
        .collect();
    Ok(Json(view))
}

pub async fn get_alphabet(Query(params): Query<ScriptParams>) -> ApiResult<Json<AlphabetResponse>> {
    let script = parse_script(params.script.as_deref())?;
    let letters = toli_lang_mongolian::alphabet(script)
        .iter()
        .map(|l| l.to_string())
        .collect();
    Ok(Json(AlphabetResponse { script, letters }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_defaults_to_traditional() {
        assert_eq!(parse_script(None).unwrap(), Script::Traditional);
        assert_eq!(parse_script(Some("cyrillic")).unwrap(), Script::Cyrillic);
        assert!(matches!(parse_script(Some("latin")), Err(QueryError::UnknownScript(_))));
    }
}
