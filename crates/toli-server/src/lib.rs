//! HTTP API for the dictionary.
//!
//! ```text
//! GET  /api/dictionary                      all entries, insertion order
//! POST /api/dictionary                      create an entry
//! GET  /api/dictionary/search?q=&limit=     substring search
//! GET  /api/dictionary/letter/{letter}      first-letter filter (?script=)
//! GET  /api/dictionary/browse               sorted, script-projected view
//! GET  /api/dictionary/alphabet             browse letters (?script=)
//! GET  /api/dictionary/{id}                 single entry or 404
//! ```

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorBody};
pub use routes::AlphabetResponse;
pub use state::AppState;

/// Build the HTTP API router over the shared state
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/dictionary",
            get(routes::list_entries).post(routes::create_entry),
        )
        .route("/api/dictionary/search", get(routes::search_entries))
        .route("/api/dictionary/letter/{letter}", get(routes::entries_by_letter))
        .route("/api/dictionary/browse", get(routes::browse_entries))
        .route("/api/dictionary/alphabet", get(routes::get_alphabet))
        .route("/api/dictionary/{id}", get(routes::get_entry))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A panicking handler becomes a generic 500
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::internal("Internal server error", detail).into_response()
}
