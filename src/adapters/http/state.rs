//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::handlers::{
    CarouselHandler, CartHandler, ChatHandler, CheckoutHandler, ContentHandler, HandlerContext,
    MembershipHandler, MenuHandler, SessionHandler, StoreHandler, TrackingHandler,
};

/// Application state containing every handler.
///
/// Cloned per request; all handlers are Arc-wrapped and share one
/// `HandlerContext`.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionHandler>,
    pub menu: Arc<MenuHandler>,
    pub cart: Arc<CartHandler>,
    pub checkout: Arc<CheckoutHandler>,
    pub tracking: Arc<TrackingHandler>,
    pub chat: Arc<ChatHandler>,
    pub stores: Arc<StoreHandler>,
    pub membership: Arc<MembershipHandler>,
    pub content: Arc<ContentHandler>,
    pub carousels: Arc<CarouselHandler>,
}

impl AppState {
    pub fn new(ctx: HandlerContext) -> Self {
        Self {
            sessions: Arc::new(SessionHandler::new(ctx.clone())),
            menu: Arc::new(MenuHandler::new(ctx.clone())),
            cart: Arc::new(CartHandler::new(ctx.clone())),
            checkout: Arc::new(CheckoutHandler::new(ctx.clone())),
            tracking: Arc::new(TrackingHandler::new(ctx.clone())),
            chat: Arc::new(ChatHandler::new(ctx.clone())),
            stores: Arc::new(StoreHandler::new(ctx.clone())),
            membership: Arc::new(MembershipHandler::new(ctx.clone())),
            content: Arc::new(ContentHandler::new(ctx.clone())),
            carousels: Arc::new(CarouselHandler::new(ctx)),
        }
    }
}
