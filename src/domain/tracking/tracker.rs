//! The live order tracker.
//!
//! Advances one simulated second per `tick`. The application layer drives
//! ticks from a repeating timer while the tracker is visible.

use serde::{Deserialize, Serialize};

use super::OrderStage;
use crate::domain::foundation::StateMachine;

/// Relation of a stage to the tracker's current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageState {
    Completed,
    Active,
    Upcoming,
}

/// Outcome of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Hidden,
    Waiting,
    Advanced(OrderStage),
    Delivered,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTracker {
    visible: bool,
    stage: OrderStage,
    elapsed_secs: u32,
    item_count: u32,
}

impl OrderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn stage(&self) -> OrderStage {
        self.stage
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Shows the tracker from the first stage.
    pub fn open(&mut self, item_count: u32) {
        self.visible = true;
        self.stage = OrderStage::Preparing;
        self.elapsed_secs = 0;
        self.item_count = item_count;
    }

    /// Advances the clock by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.visible {
            return TickOutcome::Hidden;
        }
        if self.stage == OrderStage::Delivered {
            return TickOutcome::Delivered;
        }

        self.elapsed_secs += 1;
        if self.elapsed_secs < self.stage.duration_secs() {
            return TickOutcome::Waiting;
        }

        match self.stage.next().map(|next| self.stage.transition_to(next)) {
            Some(Ok(next)) => {
                self.stage = next;
                self.elapsed_secs = 0;
                if next == OrderStage::Delivered {
                    TickOutcome::Delivered
                } else {
                    TickOutcome::Advanced(next)
                }
            }
            _ => TickOutcome::Delivered,
        }
    }

    /// Percent through the current stage, capped at 100. Zero once delivered.
    pub fn progress_percent(&self) -> u32 {
        let duration = self.stage.duration_secs();
        if duration == 0 {
            return 0;
        }
        (self.elapsed_secs * 100 / duration).min(100)
    }

    pub fn stage_state(&self, stage: OrderStage) -> StageState {
        use std::cmp::Ordering;
        match stage.position().cmp(&self.stage.position()) {
            Ordering::Less => StageState::Completed,
            Ordering::Equal => StageState::Active,
            Ordering::Greater => StageState::Upcoming,
        }
    }

    pub fn stage_states(&self) -> Vec<(OrderStage, StageState)> {
        OrderStage::all()
            .iter()
            .map(|s| (*s, self.stage_state(*s)))
            .collect()
    }

    /// Hides the tracker and rewinds it.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}
