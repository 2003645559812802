//! Integration tests for the note access controller.
//!
//! These run against a real PostgreSQL database and are gated behind the
//! `integration-tests` feature:
//!
//! ```text
//! DATABASE_URL=postgres://... cargo test -p notehub-store --features integration-tests
//! ```

#![cfg(feature = "integration-tests")]

use uuid::Uuid;

use notehub_core::{NoteId, UserId};
use notehub_store::{AccessError, NewUser, NoteAccess, NoteUpdate, Store, StoreConfig};

async fn connect() -> Store {
    let config = StoreConfig::from_env().expect("DATABASE_URL must be set for integration tests");
    Store::connect(config).await.expect("failed to connect")
}

/// Create a user with a unique username/email. Password hashing is not
/// under test here, so the hash is a placeholder.
async fn create_user(store: &Store, label: &str) -> UserId {
    let suffix = Uuid::new_v4().simple().to_string();
    let user = NewUser::new(
        format!("{label}_{suffix}"),
        format!("{label}_{suffix}@test.com"),
        "unusable-hash".to_string(),
    );
    let row = store.insert_user(&user).await.expect("insert user");
    UserId::from_uuid(row.id)
}

#[tokio::test]
async fn create_with_blank_title_persists_nothing() {
    let store = connect().await;
    let access = NoteAccess::new(&store);
    let alice = create_user(&store, "alice").await;

    let err = access.create(alice, "", "This is a test message").await;
    assert!(matches!(err, Err(AccessError::Validation(_))));

    let err = access.create(alice, "   ", "padded").await;
    assert!(matches!(err, Err(AccessError::Validation(_))));

    let notes = access.list(alice).await.unwrap();
    assert!(notes.is_empty());
}

#[tokio::test]
async fn other_users_notes_are_not_found() {
    let store = connect().await;
    let access = NoteAccess::new(&store);
    let alice = create_user(&store, "alice").await;
    let bob = create_user(&store, "bob").await;

    let note = access.create(alice, "Private", "owned by alice").await.unwrap();

    assert!(matches!(
        access.get(bob, note.id).await,
        Err(AccessError::NoteNotFound(_))
    ));
    assert!(matches!(
        access
            .update(bob, note.id, NoteUpdate { title: Some("stolen".into()), content: None })
            .await,
        Err(AccessError::NoteNotFound(_))
    ));
    assert!(matches!(
        access.delete(bob, note.id).await,
        Err(AccessError::NoteNotFound(_))
    ));

    // Still intact for the owner
    let fetched = access.get(alice, note.id).await.unwrap();
    assert_eq!(fetched.title, "Private");
}

#[tokio::test]
async fn share_is_idempotent() {
    let store = connect().await;
    let access = NoteAccess::new(&store);
    let alice = create_user(&store, "alice").await;
    let bob = create_user(&store, "bob").await;

    let note = access.create(alice, "Shared", "").await.unwrap();

    access.share(alice, note.id, bob).await.unwrap();
    access.share(alice, note.id, bob).await.unwrap();

    let fetched = access.get(alice, note.id).await.unwrap();
    assert_eq!(fetched.shared_with, vec![bob]);
}

#[tokio::test]
async fn share_with_unknown_user_changes_nothing() {
    let store = connect().await;
    let access = NoteAccess::new(&store);
    let alice = create_user(&store, "alice").await;

    let note = access.create(alice, "Unshared", "").await.unwrap();
    let ghost = UserId::new();

    assert!(matches!(
        access.share(alice, note.id, ghost).await,
        Err(AccessError::UserNotFound(_))
    ));

    let fetched = access.get(alice, note.id).await.unwrap();
    assert!(fetched.shared_with.is_empty());
}

#[tokio::test]
async fn share_with_owner_is_rejected() {
    let store = connect().await;
    let access = NoteAccess::new(&store);
    let alice = create_user(&store, "alice").await;

    let note = access.create(alice, "Mine", "").await.unwrap();

    assert!(matches!(
        access.share(alice, note.id, alice).await,
        Err(AccessError::Validation(_))
    ));

    let fetched = access.get(alice, note.id).await.unwrap();
    assert!(fetched.shared_with.is_empty());
}

#[tokio::test]
async fn empty_search_query_is_rejected() {
    let store = connect().await;
    let access = NoteAccess::new(&store);
    let alice = create_user(&store, "alice").await;

    for query in ["", "   "] {
        let err = access.search(alice, query).await;
        match err {
            Err(AccessError::Validation(msg)) => {
                assert_eq!(msg, "Please provide a search query");
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn search_finds_note_by_title() {
    let store = connect().await;
    let access = NoteAccess::new(&store);
    let alice = create_user(&store, "alice").await;

    // Unique marker so this test is independent of existing rows
    let marker = Uuid::new_v4().simple().to_string();
    let title = format!("Billy Smith {marker}");
    let note = access
        .create(alice, &title, "This is a test message")
        .await
        .unwrap();

    let results = access.search(alice, &format!("Billy Smith {marker}")).await.unwrap();
    assert!(results.iter().any(|n| n.id == note.id));
    // Best match first: the created note contains every query term
    assert_eq!(results[0].id, note.id);
}

#[tokio::test]
async fn search_crosses_ownership_boundaries() {
    let store = connect().await;
    let access = NoteAccess::new(&store);
    let alice = create_user(&store, "alice").await;
    let bob = create_user(&store, "bob").await;

    let marker = Uuid::new_v4().simple().to_string();
    let note = access.create(alice, &format!("global {marker}"), "").await.unwrap();

    // Bob neither owns the note nor was granted it, yet search surfaces it.
    let results = access.search(bob, &marker).await.unwrap();
    assert!(results.iter().any(|n| n.id == note.id));
}

#[tokio::test]
async fn note_lifecycle_end_to_end() {
    let store = connect().await;
    let access = NoteAccess::new(&store);
    let alice = create_user(&store, "alice").await;

    let note = access.create(alice, "X", "Y").await.unwrap();
    assert_eq!(note.title, "X");
    assert_eq!(note.content, "Y");
    assert!(note.shared_with.is_empty());

    let fetched = access.get(alice, note.id).await.unwrap();
    assert_eq!(fetched.title, "X");

    let updated = access
        .update(alice, note.id, NoteUpdate { title: Some("Z".into()), content: None })
        .await
        .unwrap();
    assert_eq!(updated.title, "Z");
    assert_eq!(updated.content, "Y");

    access.delete(alice, note.id).await.unwrap();
    assert!(matches!(
        access.get(alice, note.id).await,
        Err(AccessError::NoteNotFound(_))
    ));
}

#[tokio::test]
async fn update_with_blank_title_is_rejected() {
    let store = connect().await;
    let access = NoteAccess::new(&store);
    let alice = create_user(&store, "alice").await;

    let note = access.create(alice, "Keep me", "body").await.unwrap();

    assert!(matches!(
        access
            .update(alice, note.id, NoteUpdate { title: Some("  ".into()), content: None })
            .await,
        Err(AccessError::Validation(_))
    ));

    let fetched = access.get(alice, note.id).await.unwrap();
    assert_eq!(fetched.title, "Keep me");
}

#[tokio::test]
async fn unknown_note_id_is_not_found() {
    let store = connect().await;
    let access = NoteAccess::new(&store);
    let alice = create_user(&store, "alice").await;

    assert!(matches!(
        access.get(alice, NoteId::new()).await,
        Err(AccessError::NoteNotFound(_))
    ));
}

#[tokio::test]
async fn token_issue_is_idempotent() {
    let store = connect().await;
    let alice = create_user(&store, "alice").await;

    let first = store.get_or_create_token(alice.0, "a".repeat(40).as_str()).await.unwrap();
    let second = store.get_or_create_token(alice.0, "b".repeat(40).as_str()).await.unwrap();
    assert_eq!(first, second);

    let resolved = store.get_user_by_token(&first).await.unwrap().unwrap();
    assert_eq!(resolved.id, alice.0);
}

#[tokio::test]
async fn revoked_token_no_longer_resolves() {
    let store = connect().await;
    let alice = create_user(&store, "alice").await;

    let key = store.get_or_create_token(alice.0, "c".repeat(40).as_str()).await.unwrap();
    store.delete_token_for_user(alice.0).await.unwrap();
    assert!(store.get_user_by_token(&key).await.unwrap().is_none());
}
