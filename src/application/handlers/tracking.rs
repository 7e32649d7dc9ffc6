//! Live order tracker driven by a one-second tick.

use std::sync::Arc;

use futures::FutureExt;

use super::{HandlerContext, HandlerError};
use crate::domain::foundation::SessionId;
use crate::domain::tracking::{OrderTracker, TickOutcome};
use crate::ports::{RepeatingTask, TimerFlow, TimerGroup, TimerKey, TimerKind};

/// Starts ticking a tracker that was just opened.
pub(crate) fn begin_ticking(ctx: &HandlerContext, id: SessionId) {
    let task_ctx = ctx.clone();
    let task: RepeatingTask = Arc::new(move || {
        let ctx = task_ctx.clone();
        async move {
            let Some(mut session) = ctx.lock_for_timer(&id).await else {
                return TimerFlow::Stop;
            };
            match session.tracker.tick() {
                TickOutcome::Waiting => TimerFlow::Continue,
                TickOutcome::Advanced(stage) => {
                    tracing::debug!(session_id = %id, stage = stage.id(), "order advanced");
                    TimerFlow::Continue
                }
                TickOutcome::Delivered => {
                    tracing::debug!(session_id = %id, "order delivered");
                    schedule_auto_close(&ctx, id);
                    TimerFlow::Stop
                }
                TickOutcome::Hidden => TimerFlow::Stop,
            }
        }
        .boxed()
    });

    let tick = ctx.delays.order_tick();
    ctx.timers
        .schedule_repeating(TimerKey::new(id, TimerKind::TrackerTick), tick, tick, task);
}

fn schedule_auto_close(ctx: &HandlerContext, id: SessionId) {
    let task_ctx = ctx.clone();
    ctx.timers.schedule(
        TimerKey::new(id, TimerKind::TrackerAutoClose),
        ctx.delays.tracker_auto_close(),
        async move {
            if let Some(mut session) = task_ctx.lock_for_timer(&id).await {
                session.finish_tracking();
                task_ctx
                    .timers
                    .cancel(&TimerKey::new(id, TimerKind::TrackerTick));
                tracing::debug!(session_id = %id, "tracker closed after delivery");
            }
        }
        .boxed(),
    );
}

pub struct TrackingHandler {
    ctx: HandlerContext,
}

impl TrackingHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self { ctx }
    }

    pub async fn view(&self, id: &SessionId) -> Result<OrderTracker, HandlerError> {
        Ok(self.ctx.lock_session(id).await?.tracker.clone())
    }

    /// Hides the tracker, stops its timers and empties the cart.
    pub async fn close(&self, id: &SessionId) -> Result<OrderTracker, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        self.ctx.timers.cancel_group(id, TimerGroup::Tracker);
        session.finish_tracking();
        Ok(session.tracker.clone())
    }
}
