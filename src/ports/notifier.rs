//! Notifier port.
//!
//! Toasts are queued per session and drained by the client.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::notification::Toast;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Queues a toast for a session.
    async fn notify(&self, session: SessionId, toast: Toast);

    /// Removes and returns every queued toast, oldest first.
    async fn drain(&self, session: &SessionId) -> Vec<Toast>;

    /// Forgets a session's queue without delivering it.
    async fn discard(&self, session: &SessionId);
}
