//! Shared dependencies for every handler.

use std::sync::Arc;

use tokio::sync::OwnedMutexGuard;

use super::HandlerError;
use crate::config::SimulationConfig;
use crate::domain::foundation::SessionId;
use crate::domain::notification::Toast;
use crate::domain::session::SiteSession;
use crate::ports::{Notifier, SessionStore, TimerService};

/// Ports plus the simulated delays. Cheap to clone, so timer callbacks take
/// their own copy.
#[derive(Clone)]
pub struct HandlerContext {
    pub sessions: Arc<dyn SessionStore>,
    pub notifier: Arc<dyn Notifier>,
    pub timers: Arc<dyn TimerService>,
    pub delays: SimulationConfig,
}

impl HandlerContext {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
        timers: Arc<dyn TimerService>,
        delays: SimulationConfig,
    ) -> Self {
        Self {
            sessions,
            notifier,
            timers,
            delays,
        }
    }

    /// Locks a session on behalf of a visitor request and marks it active.
    ///
    /// # Errors
    ///
    /// - `Session(NotFound)` if the session does not exist
    pub async fn lock_session(
        &self,
        id: &SessionId,
    ) -> Result<OwnedMutexGuard<SiteSession>, HandlerError> {
        let handle = self.sessions.get(id).await?;
        let mut session = handle.lock_owned().await;
        session.touch();
        Ok(session)
    }

    /// Locks a session from a timer callback. Returns `None` once the session
    /// has ended. Does not count as visitor activity.
    pub async fn lock_for_timer(&self, id: &SessionId) -> Option<OwnedMutexGuard<SiteSession>> {
        let handle = self.sessions.get(id).await.ok()?;
        Some(handle.lock_owned().await)
    }

    pub async fn toast(&self, session: SessionId, toast: Toast) {
        self.notifier.notify(session, toast).await;
    }
}
