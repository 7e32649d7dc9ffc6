//! Application layer - Handlers that orchestrate domain operations.
//!
//! This layer coordinates the session store, the toast notifier and the
//! timer service around the pure domain types.

pub mod handlers;

pub use handlers::{
    CarouselHandler, CartHandler, CartSnapshot, ChatHandler, CheckoutHandler, ContentHandler,
    HandlerContext, HandlerError, LocatorSnapshot, MembershipHandler, MenuHandler,
    SessionHandler, StartSessionResult, StoreHandler, StoreLink, TrackingHandler,
};
