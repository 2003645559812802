//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx
//! queries. They are separate from the domain types in notehub-core so
//! credential material stays inside this crate.

use chrono::{DateTime, Utc};
use notehub_core::{Note, NoteId, User, UserId};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl UserRow {
    /// Convert to the API-facing user type, dropping the credential.
    pub fn into_user(self) -> User {
        User {
            id: UserId::from_uuid(self.id),
            username: self.username,
            email: self.email,
            created: self.created,
            updated: self.updated,
        }
    }
}

/// Input for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
        }
    }
}

/// Database row for the `auth_tokens` table.
#[derive(Debug, Clone, FromRow)]
pub struct AuthTokenRow {
    pub key: String,
    pub user_id: Uuid,
    pub created: DateTime<Utc>,
}

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub owner_id: Uuid,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl NoteRow {
    /// Convert to the API-facing note type with its shared-with set.
    pub fn into_note(self, shared_with: Vec<Uuid>) -> Note {
        Note {
            id: NoteId::from_uuid(self.id),
            title: self.title,
            content: self.content,
            owner: UserId::from_uuid(self.owner_id),
            shared_with: shared_with.into_iter().map(UserId::from_uuid).collect(),
            created: self.created,
            updated: self.updated,
        }
    }

    /// The text the search ranking scores against.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }
}

/// Input for creating a new note.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub owner_id: Uuid,
}

impl NewNote {
    pub fn new(title: String, content: String, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            owner_id,
        }
    }
}

/// Partial update of a note. Fields left as `None` are unchanged.
#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Database row for the `note_shares` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteShareRow {
    pub note_id: Uuid,
    pub user_id: Uuid,
    pub granted: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_assigns_id() {
        let a = NewUser::new("a".into(), "a@test.com".into(), "hash".into());
        let b = NewUser::new("b".into(), "b@test.com".into(), "hash".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_user_row_into_user_drops_credential() {
        let row = UserRow {
            id: Uuid::new_v4(),
            username: "testuser1".into(),
            email: "testuser1@test.com".into(),
            password_hash: "secret-hash".into(),
            created: Utc::now(),
            updated: Utc::now(),
        };
        let user = row.into_user();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("testuser1"));
    }

    #[test]
    fn test_note_row_into_note_maps_shares() {
        let owner = Uuid::new_v4();
        let shared = Uuid::new_v4();
        let row = NoteRow {
            id: Uuid::new_v4(),
            title: "X".into(),
            content: "Y".into(),
            owner_id: owner,
            created: Utc::now(),
            updated: Utc::now(),
        };
        let note = row.into_note(vec![shared]);
        assert_eq!(note.owner.0, owner);
        assert_eq!(note.shared_with.len(), 1);
        assert_eq!(note.shared_with[0].0, shared);
    }

    #[test]
    fn test_searchable_text_concatenates_title_and_content() {
        let row = NoteRow {
            id: Uuid::new_v4(),
            title: "Billy Smith".into(),
            content: "This is a test message".into(),
            owner_id: Uuid::new_v4(),
            created: Utc::now(),
            updated: Utc::now(),
        };
        assert_eq!(row.searchable_text(), "Billy Smith This is a test message");
    }

    #[test]
    fn test_note_update_is_empty() {
        assert!(NoteUpdate::default().is_empty());
        let update = NoteUpdate {
            title: Some("Z".into()),
            content: None,
        };
        assert!(!update.is_empty());
    }
}
