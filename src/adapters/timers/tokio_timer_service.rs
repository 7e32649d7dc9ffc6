//! Tokio-backed timer service.
//!
//! Each timer is a spawned task sleeping on the tokio clock. Cancelling a
//! timer aborts its `JoinHandle`, so a cancelled callback never runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::domain::foundation::SessionId;
use crate::ports::{RepeatingTask, TimerFlow, TimerGroup, TimerKey, TimerService, TimerTask};

/// Timer service that spawns one tokio task per timer.
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Default, Clone)]
pub struct TokioTimerService {
    tasks: Arc<Mutex<HashMap<TimerKey, JoinHandle<()>>>>,
}

impl TokioTimerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers that have not yet finished.
    pub fn pending_count(&self) -> usize {
        self.lock_tasks()
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    fn lock_tasks(&self) -> MutexGuard<'_, HashMap<TimerKey, JoinHandle<()>>> {
        // The map holds no invariants a panicking holder could break.
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn install(&self, key: TimerKey, handle: JoinHandle<()>) {
        let mut tasks = self.lock_tasks();
        tasks.retain(|_, existing| !existing.is_finished());
        if let Some(previous) = tasks.insert(key, handle) {
            previous.abort();
        }
    }

    fn cancel_where(&self, predicate: impl Fn(&TimerKey) -> bool) -> usize {
        let mut tasks = self.lock_tasks();
        let keys: Vec<TimerKey> = tasks.keys().filter(|k| predicate(k)).copied().collect();

        let mut cancelled = 0;
        for key in keys {
            if let Some(handle) = tasks.remove(&key) {
                if !handle.is_finished() {
                    cancelled += 1;
                }
                handle.abort();
            }
        }
        cancelled
    }
}

impl TimerService for TokioTimerService {
    fn schedule(&self, key: TimerKey, delay: Duration, task: TimerTask) {
        let deadline = Instant::now() + delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            task.await;
        });
        self.install(key, handle);
    }

    fn schedule_repeating(
        &self,
        key: TimerKey,
        initial: Duration,
        period: Duration,
        task: RepeatingTask,
    ) {
        let start = Instant::now() + initial;
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if (task)().await == TimerFlow::Stop {
                    break;
                }
            }
        });
        self.install(key, handle);
    }

    fn cancel(&self, key: &TimerKey) -> bool {
        self.cancel_where(|k| k == key) > 0
    }

    fn cancel_group(&self, session: &SessionId, group: TimerGroup) -> usize {
        let cancelled = self.cancel_where(|k| k.session == *session && k.kind.group() == group);
        if cancelled > 0 {
            tracing::debug!(%session, ?group, cancelled, "timers cancelled");
        }
        cancelled
    }

    fn cancel_session(&self, session: &SessionId) -> usize {
        let cancelled = self.cancel_where(|k| k.session == *session);
        tracing::debug!(%session, cancelled, "session timers cancelled");
        cancelled
    }

    fn is_scheduled(&self, key: &TimerKey) -> bool {
        self.lock_tasks()
            .get(key)
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::MessageId;
    use crate::ports::TimerKind;
    use futures::FutureExt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    fn bump(count: &Arc<AtomicUsize>) -> TimerTask {
        let count = Arc::clone(count);
        async move {
            count.fetch_add(1, Ordering::SeqCst);
        }
        .boxed()
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[tokio::test(start_paused = true)]
    async fn one_shot_fires_after_delay() {
        let timers = TokioTimerService::new();
        let fired = counter();
        let key = TimerKey::new(SessionId::new(), TimerKind::UpiVerification);

        timers.schedule(key, ms(2000), bump(&fired));
        tokio::time::sleep(ms(1999)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(timers.is_scheduled(&key));

        tokio::time::sleep(ms(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!timers.is_scheduled(&key));
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_a_key_replaces_the_earlier_timer() {
        let timers = TokioTimerService::new();
        let first = counter();
        let second = counter();
        let key = TimerKey::new(SessionId::new(), TimerKind::PromoCopiedReset);

        timers.schedule(key, ms(2000), bump(&first));
        tokio::time::sleep(ms(1000)).await;
        timers.schedule(key, ms(2000), bump(&second));
        tokio::time::sleep(ms(2500)).await;

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_never_fires() {
        let timers = TokioTimerService::new();
        let fired = counter();
        let key = TimerKey::new(SessionId::new(), TimerKind::PaymentProcessing);

        timers.schedule(key, ms(2000), bump(&fired));
        assert!(timers.cancel(&key));
        assert!(!timers.cancel(&key));

        tokio::time::sleep(ms(5000)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_group_leaves_other_groups_alone() {
        let timers = TokioTimerService::new();
        let session = SessionId::new();
        let chat = counter();
        let promo = counter();

        timers.schedule(
            TimerKey::new(session, TimerKind::ChatReply(MessageId::new())),
            ms(1500),
            bump(&chat),
        );
        timers.schedule(TimerKey::new(session, TimerKind::ChatWelcome), ms(500), bump(&chat));
        timers.schedule(TimerKey::new(session, TimerKind::PromoCopiedReset), ms(2000), bump(&promo));

        assert_eq!(timers.cancel_group(&session, TimerGroup::Chat), 2);
        tokio::time::sleep(ms(3000)).await;

        assert_eq!(chat.load(Ordering::SeqCst), 0);
        assert_eq!(promo.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_session_only_touches_that_session() {
        let timers = TokioTimerService::new();
        let ended = SessionId::new();
        let other = SessionId::new();
        let fired = counter();

        timers.schedule(TimerKey::new(ended, TimerKind::TrackerAutoClose), ms(5000), bump(&fired));
        timers.schedule(TimerKey::new(ended, TimerKind::CheckoutRedirect), ms(2000), bump(&fired));
        timers.schedule(TimerKey::new(other, TimerKind::CheckoutRedirect), ms(2000), bump(&fired));

        assert_eq!(timers.cancel_session(&ended), 2);
        tokio::time::sleep(ms(6000)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(timers.pending_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn repeating_timer_runs_until_task_stops() {
        let timers = TokioTimerService::new();
        let ticks = counter();
        let key = TimerKey::new(SessionId::new(), TimerKind::TrackerTick);

        let task_ticks = Arc::clone(&ticks);
        let task: RepeatingTask = Arc::new(move || {
            let ticks = Arc::clone(&task_ticks);
            async move {
                if ticks.fetch_add(1, Ordering::SeqCst) + 1 >= 3 {
                    TimerFlow::Stop
                } else {
                    TimerFlow::Continue
                }
            }
            .boxed()
        });

        timers.schedule_repeating(key, ms(1000), ms(1000), task);
        tokio::time::sleep(ms(1500)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);

        tokio::time::sleep(ms(10_000)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 3);
        assert!(!timers.is_scheduled(&key));
    }

    #[tokio::test(start_paused = true)]
    async fn repeating_timer_honours_initial_delay() {
        let timers = TokioTimerService::new();
        let ticks = counter();
        let key = TimerKey::new(
            SessionId::new(),
            TimerKind::CarouselRotate(crate::domain::session::CarouselKind::Testimonials),
        );

        let task_ticks = Arc::clone(&ticks);
        let task: RepeatingTask = Arc::new(move || {
            let ticks = Arc::clone(&task_ticks);
            async move {
                ticks.fetch_add(1, Ordering::SeqCst);
                TimerFlow::Continue
            }
            .boxed()
        });

        timers.schedule_repeating(key, ms(8000), ms(5000), task);
        tokio::time::sleep(ms(7900)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);
        tokio::time::sleep(ms(200)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
        tokio::time::sleep(ms(5000)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);

        assert!(timers.cancel(&key));
    }
}
