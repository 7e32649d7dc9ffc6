//! Featured-dish and testimonial carousels.

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;

use super::{HandlerContext, HandlerError};
use crate::config::SimulationConfig;
use crate::domain::content::Carousel;
use crate::domain::foundation::SessionId;
use crate::domain::session::CarouselKind;
use crate::ports::{RepeatingTask, TimerFlow, TimerKey, TimerKind};

fn rotation_period(delays: &SimulationConfig, kind: CarouselKind) -> Duration {
    match kind {
        CarouselKind::Featured => delays.featured_rotation(),
        CarouselKind::Testimonials => delays.testimonials_rotation(),
    }
}

fn first_rotation(delays: &SimulationConfig, kind: CarouselKind) -> Duration {
    match kind {
        CarouselKind::Featured => delays.featured_rotation(),
        CarouselKind::Testimonials => delays.testimonials_first_rotation(),
    }
}

/// Starts autoplay for both carousels of a fresh session.
pub(crate) fn start_autoplay(ctx: &HandlerContext, id: SessionId) {
    for kind in [CarouselKind::Featured, CarouselKind::Testimonials] {
        schedule_rotation(ctx, id, kind, first_rotation(&ctx.delays, kind));
    }
}

fn schedule_rotation(ctx: &HandlerContext, id: SessionId, kind: CarouselKind, initial: Duration) {
    let task_ctx = ctx.clone();
    let task: RepeatingTask = Arc::new(move || {
        let ctx = task_ctx.clone();
        async move {
            let Some(mut session) = ctx.lock_for_timer(&id).await else {
                return TimerFlow::Stop;
            };
            let carousel = session.carousel_mut(kind);
            if !carousel.is_autoplaying() {
                return TimerFlow::Stop;
            }
            carousel.next();
            TimerFlow::Continue
        }
        .boxed()
    });

    ctx.timers.schedule_repeating(
        TimerKey::new(id, TimerKind::CarouselRotate(kind)),
        initial,
        rotation_period(&ctx.delays, kind),
        task,
    );
}

pub struct CarouselHandler {
    ctx: HandlerContext,
}

impl CarouselHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self { ctx }
    }

    pub async fn view(&self, id: &SessionId, kind: CarouselKind) -> Result<Carousel, HandlerError> {
        let session = self.ctx.lock_session(id).await?;
        Ok(*session.carousel(kind))
    }

    pub async fn next(&self, id: &SessionId, kind: CarouselKind) -> Result<Carousel, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        let carousel = session.carousel_mut(kind);
        carousel.next();
        Ok(*carousel)
    }

    pub async fn prev(&self, id: &SessionId, kind: CarouselKind) -> Result<Carousel, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        let carousel = session.carousel_mut(kind);
        carousel.prev();
        Ok(*carousel)
    }

    /// Jumps to a slide. Out-of-range indices leave the carousel as it was.
    pub async fn go_to(
        &self,
        id: &SessionId,
        kind: CarouselKind,
        index: usize,
    ) -> Result<Carousel, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        let carousel = session.carousel_mut(kind);
        carousel.go_to(index);
        Ok(*carousel)
    }

    /// Pointer entered the carousel: stop rotating.
    pub async fn hover(&self, id: &SessionId, kind: CarouselKind) -> Result<Carousel, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        let carousel = session.carousel_mut(kind);
        carousel.pause();
        self.ctx
            .timers
            .cancel(&TimerKey::new(*id, TimerKind::CarouselRotate(kind)));
        Ok(*carousel)
    }

    /// Pointer left the carousel: rotate again one full period from now.
    pub async fn leave(&self, id: &SessionId, kind: CarouselKind) -> Result<Carousel, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        let carousel = session.carousel_mut(kind);
        if !carousel.is_autoplaying() {
            carousel.resume();
            schedule_rotation(&self.ctx, *id, kind, rotation_period(&self.ctx.delays, kind));
        }
        Ok(*carousel)
    }
}
