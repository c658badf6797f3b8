use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{SessionStore, SessionStoreError};
use crate::domain::{SessionId, SessionState};

struct Entry {
    state: SessionState,
    last_seen: Instant,
}

/// Process-local sessions. Entries untouched for longer than `idle_timeout`
/// load as empty and are swept on the next save.
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<SessionId, Entry>>,
    idle_timeout: Duration,
}

impl InMemorySessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, id: SessionId) -> Result<SessionState, SessionStoreError> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(&id) {
            Some(entry) if entry.last_seen.elapsed() < self.idle_timeout => {
                entry.last_seen = Instant::now();
                Ok(entry.state.clone())
            }
            _ => Ok(SessionState::default()),
        }
    }

    async fn save(&self, id: SessionId, state: SessionState) -> Result<(), SessionStoreError> {
        let mut entries = self.entries.write().await;
        let idle_timeout = self.idle_timeout;
        let before = entries.len();
        entries.retain(|_, entry| entry.last_seen.elapsed() < idle_timeout);
        let evicted = before - entries.len();
        if evicted > 0 {
            tracing::debug!(evicted, "Evicted idle sessions");
        }

        entries.insert(
            id,
            Entry {
                state,
                last_seen: Instant::now(),
            },
        );
        Ok(())
    }
}
