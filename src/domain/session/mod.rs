//! Visitor session domain module.
//!
//! A session is the in-memory equivalent of one open browser tab. Ending
//! it is a page reload: every piece of state and every timer goes away.

mod aggregate;
mod errors;

pub use aggregate::{CarouselKind, SiteSession};
pub use errors::SessionError;
