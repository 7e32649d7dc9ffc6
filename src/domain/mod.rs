//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, money, errors)
//! - `menu` - Menu items, categories and the static catalog
//! - `cart` - Cart aggregate and the pricing calculator
//! - `checkout` - Payment selection, UPI verification and order gating
//! - `tracking` - Scripted order tracker
//! - `chatbot` - Keyword knowledge base and chat conversation
//! - `stores` - Store directory, city filter and map view
//! - `membership` - Loyalty tiers and the signup wizard
//! - `content` - Offers, carousels, testimonials, FAQs, legal text, forms
//! - `notification` - Toast notifications
//! - `session` - Per-visitor SiteSession aggregate

pub mod cart;
pub mod chatbot;
pub mod checkout;
pub mod content;
pub mod foundation;
pub mod membership;
pub mod menu;
pub mod notification;
pub mod session;
pub mod stores;
pub mod tracking;
