use campus_portal::{
    models::Role,
    sessions::{InMemorySessionStore, ManualClock, SessionStore},
};
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;
use uuid::Uuid;

const TTL_SECS: i64 = 7200;

fn store_with_manual_clock() -> (InMemorySessionStore, Arc<ManualClock>) {
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let store = InMemorySessionStore::with_clock(TTL_SECS, clock.clone());
    (store, clock)
}

#[tokio::test]
async fn test_create_then_resolve_returns_the_session() {
    let (store, _clock) = store_with_manual_clock();
    let identity = Uuid::new_v4();
    let college = Uuid::new_v4();

    let token = store
        .create(Role::Teacher, identity, Some(college), "T. Teacher".into())
        .await;

    let session = store.resolve(&token).await.expect("fresh token resolves");
    assert_eq!(session.role, Role::Teacher);
    assert_eq!(session.identity_id, identity);
    assert_eq!(session.college_id, Some(college));
    assert_eq!(session.display_name, "T. Teacher");
}

#[tokio::test]
async fn test_tokens_are_opaque_and_distinct() {
    let (store, _clock) = store_with_manual_clock();
    let identity = Uuid::new_v4();

    let first = store
        .create(Role::Student, identity, Some(Uuid::new_v4()), "S".into())
        .await;
    let second = store
        .create(Role::Student, identity, Some(Uuid::new_v4()), "S".into())
        .await;

    // One identity may hold many concurrent sessions, each under its own
    // token.
    assert_ne!(first, second);
    assert_eq!(first.len(), 48);
    assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
    assert!(store.resolve(&first).await.is_some());
    assert!(store.resolve(&second).await.is_some());
}

#[tokio::test]
async fn test_unknown_token_resolves_to_nothing() {
    let (store, _clock) = store_with_manual_clock();
    assert!(store.resolve("never-issued").await.is_none());
}

#[tokio::test]
async fn test_terminate_invalidates_immediately_and_is_idempotent() {
    let (store, _clock) = store_with_manual_clock();
    let token = store
        .create(Role::Admin, Uuid::new_v4(), None, "root".into())
        .await;

    store.terminate(&token).await;
    assert!(store.resolve(&token).await.is_none());

    // Terminating again, or terminating garbage, is a no-op.
    store.terminate(&token).await;
    store.terminate("never-issued").await;
}

#[tokio::test]
async fn test_session_survives_until_just_before_expiry() {
    let (store, clock) = store_with_manual_clock();
    let token = store
        .create(Role::College, Uuid::new_v4(), None, "Uni".into())
        .await;

    clock.advance(Duration::seconds(TTL_SECS - 1));
    assert!(store.resolve(&token).await.is_some());
}

#[tokio::test]
async fn test_session_expires_at_the_absolute_deadline() {
    let (store, clock) = store_with_manual_clock();
    let token = store
        .create(Role::College, Uuid::new_v4(), None, "Uni".into())
        .await;

    clock.advance(Duration::seconds(TTL_SECS));
    assert!(store.resolve(&token).await.is_none());
    // Lazily swept: still gone on the next resolve.
    assert!(store.resolve(&token).await.is_none());
}

#[tokio::test]
async fn test_expiry_is_absolute_not_sliding() {
    let (store, clock) = store_with_manual_clock();
    let token = store
        .create(Role::Teacher, Uuid::new_v4(), Some(Uuid::new_v4()), "T".into())
        .await;

    // Activity does not extend the deadline.
    for _ in 0..3 {
        clock.advance(Duration::seconds(TTL_SECS / 4));
        assert!(store.resolve(&token).await.is_some());
    }
    clock.advance(Duration::seconds(TTL_SECS / 2));
    assert!(store.resolve(&token).await.is_none());
}

#[tokio::test]
async fn test_expiry_of_one_session_leaves_others_alone() {
    let (store, clock) = store_with_manual_clock();
    let early = store
        .create(Role::Student, Uuid::new_v4(), Some(Uuid::new_v4()), "A".into())
        .await;

    clock.advance(Duration::seconds(TTL_SECS / 2));
    let late = store
        .create(Role::Student, Uuid::new_v4(), Some(Uuid::new_v4()), "B".into())
        .await;

    clock.advance(Duration::seconds(TTL_SECS / 2));
    assert!(store.resolve(&early).await.is_none());
    assert!(store.resolve(&late).await.is_some());
}
