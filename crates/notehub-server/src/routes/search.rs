//! Keyword search route.
//!
//! GET /search?q=<terms> returns notes ranked by textual relevance against
//! title and content. The query runs across all owners, not just the
//! caller's notes.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;

use notehub_core::Note;
use notehub_store::NoteAccess;

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::state::AppState;

/// Query parameters for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search terms. Missing and empty are both rejected.
    #[serde(default)]
    pub q: Option<String>,
}

/// GET /search - Search notes by keyword.
async fn search_notes(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Note>>> {
    let query = params.q.unwrap_or_default();

    let access = NoteAccess::new(state.store());
    let notes = access.search(user.id, &query).await?;

    Ok(Json(notes))
}

/// Build search routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/search", get(search_notes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_present() {
        let params: SearchParams =
            serde_json::from_value(serde_json::json!({"q": "Billy Smith"})).unwrap();
        assert_eq!(params.q.as_deref(), Some("Billy Smith"));
    }

    #[test]
    fn test_search_params_missing() {
        let params: SearchParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(params.q.is_none());
    }

    #[test]
    fn test_search_params_empty_string() {
        let params: SearchParams = serde_json::from_value(serde_json::json!({"q": ""})).unwrap();
        assert_eq!(params.q.as_deref(), Some(""));
    }
}
