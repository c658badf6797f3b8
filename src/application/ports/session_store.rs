use async_trait::async_trait;

use crate::domain::{SessionId, SessionState};

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Unknown or expired sessions load as an empty state.
    async fn load(&self, id: SessionId) -> Result<SessionState, SessionStoreError>;

    async fn save(&self, id: SessionId, state: SessionState) -> Result<(), SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session backend unavailable: {0}")]
    Unavailable(String),
}
