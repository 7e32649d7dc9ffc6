//! Crispy Chicken - storefront backend for the restaurant site.
//!
//! Serves the menu, prices the cart, simulates checkout with UPI verification,
//! runs the order tracker and the keyword chatbot, and exposes the store
//! locator, membership signup and static content.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod server;
