use std::path::PathBuf;

use mathcast::domain::{SessionDocument, SessionId, SessionState};

#[test]
fn given_uuid_string_when_parsing_session_id_then_round_trips_through_display() {
    let id = SessionId::new();
    assert_eq!(SessionId::parse(&id.to_string()), Some(id));
}

#[test]
fn given_garbage_when_parsing_session_id_then_returns_none() {
    assert_eq!(SessionId::parse("not-a-session"), None);
}

#[test]
fn given_empty_state_when_reading_document_text_then_returns_empty() {
    assert_eq!(SessionState::default().document_text(), "");
}

#[test]
fn given_uploaded_document_when_reading_document_text_then_returns_it() {
    let state = SessionState {
        document: Some(SessionDocument {
            text: "Let x be a real number.".to_string(),
            path: PathBuf::from("uploads/notes.pdf"),
        }),
        current_video: None,
    };

    assert_eq!(state.document_text(), "Let x be a real number.");
}
