//! HTTP DTOs for the order tracker.

use serde::Serialize;

use crate::domain::tracking::{OrderStage, OrderTracker, StageState};

#[derive(Debug, Clone, Serialize)]
pub struct StageResponse {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_secs: u32,
    pub state: StageState,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackerResponse {
    pub visible: bool,
    pub stage: OrderStage,
    pub elapsed_secs: u32,
    pub item_count: u32,
    pub progress_percent: u32,
    pub stages: Vec<StageResponse>,
}

impl From<&OrderTracker> for TrackerResponse {
    fn from(tracker: &OrderTracker) -> Self {
        Self {
            visible: tracker.is_visible(),
            stage: tracker.stage(),
            elapsed_secs: tracker.elapsed_secs(),
            item_count: tracker.item_count(),
            progress_percent: tracker.progress_percent(),
            stages: tracker
                .stage_states()
                .into_iter()
                .map(|(stage, state)| StageResponse {
                    id: stage.id(),
                    title: stage.title(),
                    description: stage.description(),
                    duration_secs: stage.duration_secs(),
                    state,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_tracker_starts_preparing() {
        let mut tracker = OrderTracker::new();
        tracker.open(3);
        let response = TrackerResponse::from(&tracker);
        assert!(response.visible);
        assert_eq!(response.item_count, 3);
        assert_eq!(response.stages.len(), 4);
        assert_eq!(response.stages[0].state, StageState::Active);
        assert_eq!(response.stages[3].state, StageState::Upcoming);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["stage"], "preparing");
    }
}
