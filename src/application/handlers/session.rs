//! Visitor session lifecycle.
//!
//! A session is the server-side copy of one browser tab's page state.
//! Ending it (a page reload) cancels every pending timer and drops its
//! queued toasts.

use std::time::Duration;

use super::carousel::start_autoplay;
use super::{HandlerContext, HandlerError};
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::notification::Toast;

/// Result of starting a session.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session_id: SessionId,
    pub created_at: Timestamp,
}

pub struct SessionHandler {
    ctx: HandlerContext,
}

impl SessionHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self { ctx }
    }

    /// Creates a session and starts the carousels.
    pub async fn start(&self) -> Result<StartSessionResult, HandlerError> {
        let (session_id, handle) = self.ctx.sessions.create().await?;
        let created_at = handle.lock().await.created_at;
        start_autoplay(&self.ctx, session_id);

        tracing::info!(%session_id, "session started");
        Ok(StartSessionResult {
            session_id,
            created_at,
        })
    }

    /// Ends a session and everything scheduled for it.
    ///
    /// # Errors
    ///
    /// - `Session(NotFound)` if the session was already gone
    pub async fn end(&self, id: &SessionId) -> Result<(), HandlerError> {
        // Make sure it exists before cancelling anything.
        self.ctx.sessions.get(id).await?;
        self.teardown(id).await;
        tracing::info!(session_id = %id, "session ended");
        Ok(())
    }

    /// Drains the session's pending toasts.
    pub async fn notifications(&self, id: &SessionId) -> Result<Vec<Toast>, HandlerError> {
        drop(self.ctx.lock_session(id).await?);
        Ok(self.ctx.notifier.drain(id).await)
    }

    /// Ends every session idle for longer than `max_idle`.
    pub async fn reap_idle(&self, max_idle: Duration) -> Result<usize, HandlerError> {
        let max_idle_secs = i64::try_from(max_idle.as_secs()).unwrap_or(i64::MAX);
        let cutoff = Timestamp::now().plus_seconds(-max_idle_secs);
        let removed = self.ctx.sessions.remove_idle(cutoff).await?;
        for id in &removed {
            self.ctx.timers.cancel_session(id);
            self.ctx.notifier.discard(id).await;
        }
        if !removed.is_empty() {
            tracing::info!(count = removed.len(), "idle sessions reaped");
        }
        Ok(removed.len())
    }

    async fn teardown(&self, id: &SessionId) {
        self.ctx.timers.cancel_session(id);
        self.ctx.notifier.discard(id).await;
        if let Err(err) = self.ctx.sessions.delete(id).await {
            tracing::warn!(session_id = %id, error = %err, "failed to delete session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::context::test_support::*;
    use super::*;
    use crate::ports::{TimerKey, TimerKind};
    use crate::domain::session::CarouselKind;

    #[tokio::test(start_paused = true)]
    async fn start_schedules_both_carousels() {
        let ctx = context();
        let handler = SessionHandler::new(ctx.clone());
        let started = handler.start().await.unwrap();

        for kind in [CarouselKind::Featured, CarouselKind::Testimonials] {
            let key = TimerKey::new(started.session_id, TimerKind::CarouselRotate(kind));
            assert!(ctx.timers.is_scheduled(&key));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn end_cancels_timers_and_forgets_session() {
        let ctx = context();
        let handler = SessionHandler::new(ctx.clone());
        let id = handler.start().await.unwrap().session_id;
        ctx.toast(id, Toast::info("pending")).await;

        handler.end(&id).await.unwrap();

        let key = TimerKey::new(id, TimerKind::CarouselRotate(CarouselKind::Featured));
        assert!(!ctx.timers.is_scheduled(&key));
        assert!(ctx.sessions.get(&id).await.is_err());
        assert!(ctx.notifier.drain(&id).await.is_empty());
        assert!(handler.end(&id).await.is_err());
    }

    #[tokio::test]
    async fn notifications_drain_once() {
        let ctx = context();
        let handler = SessionHandler::new(ctx.clone());
        let id = new_session(&ctx).await;
        ctx.toast(id, Toast::success("Added Zinger Burger to cart!")).await;

        let first = handler.notifications(&id).await.unwrap();
        assert_eq!(first.len(), 1);
        assert!(handler.notifications(&id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn notifications_for_unknown_session_fail() {
        let handler = SessionHandler::new(context());
        assert!(handler.notifications(&SessionId::new()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn reap_idle_ends_stale_sessions_only() {
        let ctx = context();
        let handler = SessionHandler::new(ctx.clone());
        let stale = handler.start().await.unwrap().session_id;
        let fresh = handler.start().await.unwrap().session_id;
        {
            let mut session = ctx.lock_for_timer(&stale).await.unwrap();
            session.last_seen = Timestamp::now().plus_seconds(-3600);
        }

        let reaped = handler.reap_idle(Duration::from_secs(1800)).await.unwrap();
        assert_eq!(reaped, 1);
        assert!(ctx.sessions.get(&stale).await.is_err());
        assert!(ctx.sessions.get(&fresh).await.is_ok());
        let key = TimerKey::new(stale, TimerKind::CarouselRotate(CarouselKind::Featured));
        assert!(!ctx.timers.is_scheduled(&key));
    }
}
