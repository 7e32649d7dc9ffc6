//! HTTP adapter for visitor session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{NotificationsResponse, SessionCreatedResponse, ToastResponse};
pub use routes::session_routes;
