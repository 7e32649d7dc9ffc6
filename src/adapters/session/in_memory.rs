//! In-memory session store.
//!
//! Sessions live only as long as the process. Each entry is its own
//! `Arc<Mutex<SiteSession>>`, so the map lock is held just long enough to
//! clone a handle.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::{SessionError, SiteSession};
use crate::ports::{SessionHandle, SessionStore};

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, SessionHandle>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self) -> Result<(SessionId, SessionHandle), SessionError> {
        let id = SessionId::new();
        let handle = Arc::new(Mutex::new(SiteSession::new(id)));
        self.sessions.write().await.insert(id, Arc::clone(&handle));
        Ok((id, handle))
    }

    async fn get(&self, id: &SessionId) -> Result<SessionHandle, SessionError> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::not_found(*id))
    }

    async fn delete(&self, id: &SessionId) -> Result<bool, SessionError> {
        Ok(self.sessions.write().await.remove(id).is_some())
    }

    async fn remove_idle(&self, cutoff: Timestamp) -> Result<Vec<SessionId>, SessionError> {
        // Snapshot handles first so no session lock is awaited under the map lock.
        let snapshot: Vec<(SessionId, SessionHandle)> = self
            .sessions
            .read()
            .await
            .iter()
            .map(|(id, handle)| (*id, Arc::clone(handle)))
            .collect();

        let mut idle = Vec::new();
        for (id, handle) in snapshot {
            if handle.lock().await.is_idle_since(&cutoff) {
                idle.push(id);
            }
        }

        let mut sessions = self.sessions.write().await;
        for id in &idle {
            sessions.remove(id);
        }
        Ok(idle)
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_get_returns_same_session() {
        let store = InMemorySessionStore::new();
        let (id, handle) = store.create().await.unwrap();

        let fetched = store.get(&id).await.unwrap();
        assert!(Arc::ptr_eq(&handle, &fetched));
        assert_eq!(fetched.lock().await.id, id);
    }

    #[tokio::test]
    async fn get_unknown_session_is_not_found() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new();
        assert_eq!(store.get(&id).await.unwrap_err(), SessionError::not_found(id));
    }

    #[tokio::test]
    async fn delete_reports_whether_session_existed() {
        let store = InMemorySessionStore::new();
        let (id, _) = store.create().await.unwrap();

        assert!(store.delete(&id).await.unwrap());
        assert!(!store.delete(&id).await.unwrap());
        assert!(store.get(&id).await.is_err());
    }

    #[tokio::test]
    async fn remove_idle_only_drops_stale_sessions() {
        let store = InMemorySessionStore::new();
        let (stale, stale_handle) = store.create().await.unwrap();
        let (fresh, _) = store.create().await.unwrap();

        let cutoff = Timestamp::now().plus_seconds(-60);
        stale_handle.lock().await.last_seen = cutoff.plus_seconds(-1);

        let removed = store.remove_idle(cutoff).await.unwrap();
        assert_eq!(removed, vec![stale]);
        assert_eq!(store.count().await, 1);
        assert!(store.get(&fresh).await.is_ok());
    }
}
