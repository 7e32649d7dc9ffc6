//! Timer service port.
//!
//! Every simulated delay on the site (UPI verification, payment, tracker
//! ticks, chatbot typing, carousels) runs through this port so it can be
//! cancelled when its view closes or the session ends.
//!
//! Timers are keyed by `(session, kind)`. Scheduling an existing key
//! replaces the earlier timer. A running task must never cancel its own key.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;

use crate::domain::foundation::{MessageId, SessionId};
use crate::domain::session::CarouselKind;

/// One-shot work run after a delay.
pub type TimerTask = BoxFuture<'static, ()>;

/// Work run on every period of a repeating timer.
pub type RepeatingTask = Arc<dyn Fn() -> BoxFuture<'static, TimerFlow> + Send + Sync>;

/// Returned by a repeating task to keep going or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerFlow {
    Continue,
    Stop,
}

/// Timers that are cancelled together when a view is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerGroup {
    Checkout,
    Tracker,
    Chat,
    Promo,
    Carousel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    UpiVerification,
    PaymentProcessing,
    CheckoutRedirect,
    TrackerTick,
    TrackerAutoClose,
    ChatWelcome,
    ChatReply(MessageId),
    ChatHandoffConnect(MessageId),
    ChatHandoffAgent(MessageId),
    PromoCopiedReset,
    CarouselRotate(CarouselKind),
}

impl TimerKind {
    pub fn group(&self) -> TimerGroup {
        match self {
            TimerKind::UpiVerification
            | TimerKind::PaymentProcessing
            | TimerKind::CheckoutRedirect => TimerGroup::Checkout,
            TimerKind::TrackerTick | TimerKind::TrackerAutoClose => TimerGroup::Tracker,
            TimerKind::ChatWelcome
            | TimerKind::ChatReply(_)
            | TimerKind::ChatHandoffConnect(_)
            | TimerKind::ChatHandoffAgent(_) => TimerGroup::Chat,
            TimerKind::PromoCopiedReset => TimerGroup::Promo,
            TimerKind::CarouselRotate(_) => TimerGroup::Carousel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub session: SessionId,
    pub kind: TimerKind,
}

impl TimerKey {
    pub fn new(session: SessionId, kind: TimerKind) -> Self {
        Self { session, kind }
    }
}

pub trait TimerService: Send + Sync {
    /// Runs `task` once after `delay`, replacing any timer with the same key.
    fn schedule(&self, key: TimerKey, delay: Duration, task: TimerTask);

    /// Runs `task` after `initial` and then every `period` until it returns
    /// `TimerFlow::Stop` or is cancelled.
    fn schedule_repeating(
        &self,
        key: TimerKey,
        initial: Duration,
        period: Duration,
        task: RepeatingTask,
    );

    /// Cancels one timer. Returns true if it was still pending.
    fn cancel(&self, key: &TimerKey) -> bool;

    /// Cancels every timer of one group for a session.
    fn cancel_group(&self, session: &SessionId, group: TimerGroup) -> usize;

    /// Cancels every timer of a session.
    fn cancel_session(&self, session: &SessionId) -> usize;

    /// Whether a timer is pending (scheduled and not yet finished).
    fn is_scheduled(&self, key: &TimerKey) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_groups() {
        let id = MessageId::new();
        assert_eq!(TimerKind::PaymentProcessing.group(), TimerGroup::Checkout);
        assert_eq!(TimerKind::TrackerAutoClose.group(), TimerGroup::Tracker);
        assert_eq!(TimerKind::ChatReply(id).group(), TimerGroup::Chat);
        assert_eq!(TimerKind::ChatHandoffAgent(id).group(), TimerGroup::Chat);
        assert_eq!(TimerKind::PromoCopiedReset.group(), TimerGroup::Promo);
        assert_eq!(
            TimerKind::CarouselRotate(CarouselKind::Featured).group(),
            TimerGroup::Carousel
        );
    }

    #[test]
    fn chat_replies_for_different_messages_have_distinct_keys() {
        let session = SessionId::new();
        let a = TimerKey::new(session, TimerKind::ChatReply(MessageId::new()));
        let b = TimerKey::new(session, TimerKind::ChatReply(MessageId::new()));
        assert_ne!(a, b);
    }
}
