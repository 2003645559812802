//! Note access control: ownership-scoped visibility, mutation, and search.
//!
//! `NoteAccess` is the one logic component of the system. Every operation
//! takes the resolved caller and decides what that caller may read, write,
//! or share, independent of transport. Ownership scoping is always an
//! explicit predicate passed to the store (owner equals caller), never
//! ambient filtering.
//!
//! Visibility notes:
//! - `list` and `get` return only notes the caller owns. Notes shared with
//!   the caller are not reachable through either path.
//! - `search` is global across all owners. Results include notes the caller
//!   neither owns nor has been granted.

use thiserror::Error;
use uuid::Uuid;

use notehub_core::rank;
use notehub_core::{Note, NoteId, UserId};

use crate::error::StoreError;
use crate::models::{NewNote, NoteRow, NoteUpdate};
use crate::store::Store;

/// Result type alias for access-controlled operations.
pub type AccessResult<T> = Result<T, AccessError>;

/// Outcomes of access-controlled operations that are the caller's fault.
#[derive(Debug, Error)]
pub enum AccessError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    /// No note with this id is visible to the caller. Deliberately covers
    /// both "does not exist" and "owned by someone else".
    #[error("note not found: {0}")]
    NoteNotFound(Uuid),

    /// The referenced user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(Uuid),

    /// Storage fault.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AccessError {
    fn blank_title() -> Self {
        Self::Validation("Title may not be blank".to_string())
    }
}

/// Access-controlled operations over the note store.
///
/// Cheap to construct; borrow one per request.
#[derive(Debug, Clone, Copy)]
pub struct NoteAccess<'a> {
    store: &'a Store,
}

impl<'a> NoteAccess<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List the caller's notes, in insertion order.
    ///
    /// Notes shared with the caller are not included.
    pub async fn list(&self, caller: UserId) -> AccessResult<Vec<Note>> {
        let rows = self.store.list_notes_for_owner(caller.0).await?;
        self.load_notes(rows).await
    }

    /// Create a note owned by the caller with an empty shared-with set.
    pub async fn create(&self, caller: UserId, title: &str, content: &str) -> AccessResult<Note> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AccessError::blank_title());
        }

        let new_note = NewNote::new(title.to_string(), content.to_string(), caller.0);
        let row = self.store.insert_note(&new_note).await?;

        tracing::info!(note_id = %row.id, owner = %caller, "Note created");

        Ok(row.into_note(Vec::new()))
    }

    /// Get a note owned by the caller.
    pub async fn get(&self, caller: UserId, note_id: NoteId) -> AccessResult<Note> {
        let row = self
            .store
            .get_note_owned(note_id.0, caller.0)
            .await?
            .ok_or(AccessError::NoteNotFound(note_id.0))?;

        self.load_note(row).await
    }

    /// Partially update a note owned by the caller.
    ///
    /// Fields not present are left unchanged. A present title that trims to
    /// empty is rejected, so the resulting title is always non-empty.
    pub async fn update(
        &self,
        caller: UserId,
        note_id: NoteId,
        mut update: NoteUpdate,
    ) -> AccessResult<Note> {
        if let Some(title) = update.title.as_ref() {
            let trimmed = title.trim();
            if trimmed.is_empty() {
                return Err(AccessError::blank_title());
            }
            update.title = Some(trimmed.to_string());
        }

        let row = self
            .store
            .update_note_owned(note_id.0, caller.0, &update)
            .await?
            .ok_or(AccessError::NoteNotFound(note_id.0))?;

        tracing::info!(note_id = %row.id, owner = %caller, "Note updated");

        self.load_note(row).await
    }

    /// Delete a note owned by the caller. Shares go with it.
    pub async fn delete(&self, caller: UserId, note_id: NoteId) -> AccessResult<()> {
        let deleted = self.store.delete_note_owned(note_id.0, caller.0).await?;
        if !deleted {
            return Err(AccessError::NoteNotFound(note_id.0));
        }

        tracing::info!(note_id = %note_id, owner = %caller, "Note deleted");
        Ok(())
    }

    /// Share a note owned by the caller with another user.
    ///
    /// Idempotent: sharing with an already-shared user is a no-op success.
    /// The owner can never appear in the shared-with set.
    pub async fn share(
        &self,
        caller: UserId,
        note_id: NoteId,
        target: UserId,
    ) -> AccessResult<()> {
        let note = self
            .store
            .get_note_owned(note_id.0, caller.0)
            .await?
            .ok_or(AccessError::NoteNotFound(note_id.0))?;

        if target.0 == note.owner_id {
            return Err(AccessError::Validation(
                "Cannot share a note with its owner".to_string(),
            ));
        }

        if !self.store.user_exists(target.0).await? {
            return Err(AccessError::UserNotFound(target.0));
        }

        self.store.add_share(note_id.0, target.0).await?;

        tracing::info!(note_id = %note_id, owner = %caller, target = %target, "Note shared");
        Ok(())
    }

    /// Search all notes by keyword, ranked by relevance.
    ///
    /// Results are not scoped to the caller's ownership: the query runs
    /// across every owner's notes. The caller identity is still required so
    /// the operation is only reachable authenticated.
    pub async fn search(&self, caller: UserId, query: &str) -> AccessResult<Vec<Note>> {
        let terms = rank::query_terms(query);
        if terms.is_empty() {
            return Err(AccessError::Validation(
                "Please provide a search query".to_string(),
            ));
        }

        let rows = self.store.search_notes(&terms).await?;
        let ranked = rank::rank_by_relevance(rows, &terms, NoteRow::searchable_text);

        tracing::debug!(caller = %caller, results = ranked.len(), "Search executed");

        self.load_notes(ranked).await
    }

    /// Attach the shared-with set to a single row.
    async fn load_note(&self, row: NoteRow) -> AccessResult<Note> {
        let shared = self.store.list_shared_user_ids(row.id).await?;
        Ok(row.into_note(shared))
    }

    /// Attach shared-with sets to rows, preserving their order.
    async fn load_notes(&self, rows: Vec<NoteRow>) -> AccessResult<Vec<Note>> {
        let mut notes = Vec::with_capacity(rows.len());
        for row in rows {
            notes.push(self.load_note(row).await?);
        }
        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_error_validation_message_is_bare() {
        let err = AccessError::Validation("Please provide a search query".to_string());
        assert_eq!(err.to_string(), "Please provide a search query");
    }

    #[test]
    fn test_access_error_blank_title_message() {
        assert_eq!(AccessError::blank_title().to_string(), "Title may not be blank");
    }

    #[test]
    fn test_note_not_found_mentions_id() {
        let id = Uuid::new_v4();
        let err = AccessError::NoteNotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
    }
}
