//! Application handlers.
//!
//! One handler per storefront feature. Each locks the visitor's session for
//! the duration of a request, applies the domain operation, queues toasts and
//! schedules whatever simulated delay follows.

mod carousel;
mod cart;
mod chat;
mod checkout;
mod content;
mod context;
mod error;
mod membership;
mod menu;
mod session;
mod stores;
mod tracking;

pub use carousel::CarouselHandler;
pub use cart::{CartHandler, CartSnapshot};
pub use chat::ChatHandler;
pub use checkout::{
    CheckoutHandler, ORDER_PLACED_MESSAGE, REDIRECTING_MESSAGE, UPI_VERIFIED_MESSAGE,
};
pub use content::ContentHandler;
pub use context::HandlerContext;
pub use error::HandlerError;
pub use membership::MembershipHandler;
pub use menu::MenuHandler;
pub use session::{SessionHandler, StartSessionResult};
pub use stores::{LocatorSnapshot, StoreHandler, StoreLink};
pub use tracking::TrackingHandler;
