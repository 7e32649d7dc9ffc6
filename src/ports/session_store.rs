//! Session store port.
//!
//! Holds every live SiteSession in memory. Each session sits behind its own
//! async mutex so requests and timer callbacks for one visitor serialize,
//! while different visitors never contend.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::{SessionError, SiteSession};

/// Shared, lockable handle to one session.
pub type SessionHandle = Arc<Mutex<SiteSession>>;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Creates and stores a fresh session.
    async fn create(&self) -> Result<(SessionId, SessionHandle), SessionError>;

    /// Looks up a live session.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session never existed or has ended
    async fn get(&self, id: &SessionId) -> Result<SessionHandle, SessionError>;

    /// Drops a session. Returns false if it was already gone.
    async fn delete(&self, id: &SessionId) -> Result<bool, SessionError>;

    /// Drops every session whose last activity is before `cutoff`.
    async fn remove_idle(&self, cutoff: Timestamp) -> Result<Vec<SessionId>, SessionError>;

    /// Number of live sessions.
    async fn count(&self) -> usize;
}
