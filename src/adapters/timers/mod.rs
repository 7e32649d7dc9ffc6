//! Timer service implementations.

mod tokio_timer_service;

pub use tokio_timer_service::TokioTimerService;
