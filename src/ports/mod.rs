//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - in-memory home of every visitor session
//! - `Notifier` - per-session toast queue
//! - `TimerService` - cancellable delays that drive the simulated steps

mod notifier;
mod session_store;
mod timer_service;

pub use notifier::Notifier;
pub use session_store::{SessionHandle, SessionStore};
pub use timer_service::{
    RepeatingTask, TimerFlow, TimerGroup, TimerKey, TimerKind, TimerService, TimerTask,
};
