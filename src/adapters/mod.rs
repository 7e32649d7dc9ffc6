//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to the outside world:
//! - `session` - Session store implementations (in-memory)
//! - `notification` - Toast queues (in-memory)
//! - `timers` - Cancellable delayed tasks on the tokio runtime
//! - `http` - Axum REST API

pub mod http;
pub mod notification;
pub mod session;
pub mod timers;

pub use notification::InMemoryNotifier;
pub use session::InMemorySessionStore;
pub use timers::TokioTimerService;
