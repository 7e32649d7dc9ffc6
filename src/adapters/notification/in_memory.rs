//! In-memory toast queue.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::domain::foundation::SessionId;
use crate::domain::notification::Toast;
use crate::ports::Notifier;

/// Keeps toasts per session until the client drains them.
#[derive(Debug, Default)]
pub struct InMemoryNotifier {
    queues: Mutex<HashMap<SessionId, Vec<Toast>>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of toasts waiting for a session.
    pub async fn pending(&self, session: &SessionId) -> usize {
        self.queues
            .lock()
            .await
            .get(session)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, session: SessionId, toast: Toast) {
        tracing::debug!(%session, kind = ?toast.kind, message = %toast.message, "toast queued");
        self.queues.lock().await.entry(session).or_default().push(toast);
    }

    async fn drain(&self, session: &SessionId) -> Vec<Toast> {
        self.queues.lock().await.remove(session).unwrap_or_default()
    }

    async fn discard(&self, session: &SessionId) {
        self.queues.lock().await.remove(session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn drain_returns_toasts_in_order_and_empties_queue() {
        let notifier = InMemoryNotifier::new();
        let session = SessionId::new();
        notifier.notify(session, Toast::success("first")).await;
        notifier.notify(session, Toast::info("second")).await;

        let toasts = notifier.drain(&session).await;
        let messages: Vec<_> = toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert!(notifier.drain(&session).await.is_empty());
    }

    #[tokio::test]
    async fn queues_are_per_session() {
        let notifier = InMemoryNotifier::new();
        let a = SessionId::new();
        let b = SessionId::new();
        notifier.notify(a, Toast::error("for a")).await;

        assert!(notifier.drain(&b).await.is_empty());
        assert_eq!(notifier.pending(&a).await, 1);
    }

    #[tokio::test]
    async fn discard_drops_pending_toasts() {
        let notifier = InMemoryNotifier::new();
        let session = SessionId::new();
        notifier.notify(session, Toast::info("gone")).await;

        notifier.discard(&session).await;
        assert_eq!(notifier.pending(&session).await, 0);
    }
}
