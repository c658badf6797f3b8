use std::path::PathBuf;
use std::time::Duration;

use mathcast::application::ports::SessionStore;
use mathcast::domain::{SessionDocument, SessionId, SessionState};
use mathcast::infrastructure::session::InMemorySessionStore;

fn state_with_text(text: &str) -> SessionState {
    SessionState {
        document: Some(SessionDocument {
            text: text.to_string(),
            path: PathBuf::from("uploads/doc.pdf"),
        }),
        current_video: None,
    }
}

#[tokio::test]
async fn given_unknown_session_when_loading_then_returns_empty_state() {
    let store = InMemorySessionStore::new(Duration::from_secs(60));

    let state = store.load(SessionId::new()).await.unwrap();

    assert!(state.document.is_none());
    assert!(state.current_video.is_none());
}

#[tokio::test]
async fn given_saved_session_when_loading_then_returns_saved_state() {
    let store = InMemorySessionStore::new(Duration::from_secs(60));
    let id = SessionId::new();

    store.save(id, state_with_text("group theory")).await.unwrap();
    let state = store.load(id).await.unwrap();

    assert_eq!(state.document_text(), "group theory");
}

#[tokio::test]
async fn given_two_sessions_when_saving_then_they_do_not_share_state() {
    let store = InMemorySessionStore::new(Duration::from_secs(60));
    let alice = SessionId::new();
    let bob = SessionId::new();

    store.save(alice, state_with_text("topology")).await.unwrap();

    assert_eq!(store.load(bob).await.unwrap().document_text(), "");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn given_idle_session_when_loading_after_timeout_then_state_is_gone() {
    let store = InMemorySessionStore::new(Duration::from_millis(20));
    let id = SessionId::new();
    store.save(id, state_with_text("measure theory")).await.unwrap();

    tokio::time::sleep(Duration::from_millis(60)).await;

    assert_eq!(store.load(id).await.unwrap().document_text(), "");
}
