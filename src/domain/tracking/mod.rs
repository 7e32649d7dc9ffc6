//! Order tracking domain module.
//!
//! A scripted four-stage animation; no real order is followed.

mod stage;
mod tracker;

pub use stage::OrderStage;
pub use tracker::{OrderTracker, StageState, TickOutcome};
