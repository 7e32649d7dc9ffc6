//! HTTP adapter for the order tracker.

mod dto;
mod handlers;
mod routes;

pub use dto::{StageResponse, TrackerResponse};
pub use routes::tracking_routes;
