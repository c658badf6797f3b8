use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::ConceptRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-client state. Each upload replaces `document`, each render replaces
/// `current_video`.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub document: Option<SessionDocument>,
    pub current_video: Option<CurrentVideo>,
}

#[derive(Debug, Clone)]
pub struct SessionDocument {
    pub text: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CurrentVideo {
    pub path: PathBuf,
    pub concept: ConceptRecord,
    pub generated_at: DateTime<Utc>,
}

impl SessionState {
    pub fn document_text(&self) -> &str {
        self.document.as_ref().map(|d| d.text.as_str()).unwrap_or("")
    }
}
