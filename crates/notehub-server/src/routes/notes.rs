//! Note CRUD and sharing routes.
//!
//! Every operation is scoped to the authenticated caller as owner; a note
//! owned by someone else behaves exactly like a missing one. Listing and
//! fetching do not include notes shared with the caller.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notehub_core::{Note, NoteId, UserId};
use notehub_store::{NoteAccess, NoteUpdate};

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::extract::ValidJson;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ShareNoteRequest {
    /// ID of the user to add to the note's shared-with set.
    pub user_to_share_with: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ShareNoteResponse {
    pub detail: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /notes - List the caller's notes.
async fn list_notes(State(state): State<AppState>, user: CurrentUser) -> ApiResult<Json<Vec<Note>>> {
    let access = NoteAccess::new(state.store());
    let notes = access.list(user.id).await?;

    tracing::debug!(user_id = %user.id, count = notes.len(), "Listed notes");

    Ok(Json(notes))
}

/// POST /notes - Create a note owned by the caller.
async fn create_note(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidJson(request): ValidJson<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let access = NoteAccess::new(state.store());
    let note = access.create(user.id, &request.title, &request.content).await?;

    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /notes/{id} - Fetch one of the caller's notes.
async fn get_note(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(note_id): Path<Uuid>,
) -> ApiResult<Json<Note>> {
    let access = NoteAccess::new(state.store());
    let note = access.get(user.id, NoteId::from_uuid(note_id)).await?;

    Ok(Json(note))
}

/// PUT /notes/{id} - Partially update one of the caller's notes.
///
/// Fields absent from the body are left unchanged.
async fn update_note(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(note_id): Path<Uuid>,
    ValidJson(request): ValidJson<UpdateNoteRequest>,
) -> ApiResult<Json<Note>> {
    let update = NoteUpdate {
        title: request.title,
        content: request.content,
    };

    let access = NoteAccess::new(state.store());
    let note = access
        .update(user.id, NoteId::from_uuid(note_id), update)
        .await?;

    Ok(Json(note))
}

/// DELETE /notes/{id} - Delete one of the caller's notes.
async fn delete_note(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(note_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let access = NoteAccess::new(state.store());
    access.delete(user.id, NoteId::from_uuid(note_id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /notes/{id}/share - Share one of the caller's notes with a user.
async fn share_note(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(note_id): Path<Uuid>,
    ValidJson(request): ValidJson<ShareNoteRequest>,
) -> ApiResult<Json<ShareNoteResponse>> {
    let access = NoteAccess::new(state.store());
    access
        .share(
            user.id,
            NoteId::from_uuid(note_id),
            UserId::from_uuid(request.user_to_share_with),
        )
        .await?;

    Ok(Json(ShareNoteResponse {
        detail: "Note shared successfully".to_string(),
    }))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/notes/{id}/share", post(share_note))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_content() {
        let json = r#"{"title": "Billy Smith"}"#;
        let request: CreateNoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title, "Billy Smith");
        assert_eq!(request.content, "");
    }

    #[test]
    fn test_create_request_missing_title_rejected() {
        let json = r#"{"content": "This is a test message"}"#;
        assert!(serde_json::from_str::<CreateNoteRequest>(json).is_err());
    }

    #[test]
    fn test_update_request_partial_fields() {
        let json = r#"{"title": "Updated title"}"#;
        let request: UpdateNoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title.as_deref(), Some("Updated title"));
        assert!(request.content.is_none());
    }

    #[test]
    fn test_share_request_deserialize() {
        let target = Uuid::new_v4();
        let json = format!(r#"{{"user_to_share_with": "{target}"}}"#);
        let request: ShareNoteRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.user_to_share_with, target);
    }

    #[test]
    fn test_share_request_missing_field_rejected() {
        assert!(serde_json::from_str::<ShareNoteRequest>("{}").is_err());
    }

    #[test]
    fn test_share_response_serialize() {
        let response = ShareNoteResponse {
            detail: "Note shared successfully".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"detail":"Note shared successfully"}"#);
    }
}
