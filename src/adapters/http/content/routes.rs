//! HTTP routes for site content, offers, forms and footer actions.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    copy_code, franchise_inquiry, get_about, get_copied_code, get_footer, get_help_centre,
    get_home, get_legal, list_featured, list_legal, list_offers, list_testimonials, order_offer,
    perform_action, request_location, subscribe,
};
use crate::adapters::http::AppState;

pub fn content_routes() -> Router<AppState> {
    Router::new()
        // Static content
        .route("/home", get(get_home))
        .route("/offers", get(list_offers))
        .route("/featured", get(list_featured))
        .route("/testimonials", get(list_testimonials))
        .route("/faqs", get(get_help_centre))
        .route("/about", get(get_about))
        .route("/footer", get(get_footer))
        .route("/legal", get(list_legal))
        .route("/legal/:document", get(get_legal))
        // Offers
        .route("/sessions/:id/promo-codes/copied", get(get_copied_code))
        .route("/sessions/:id/promo-codes/:code/copy", post(copy_code))
        .route("/sessions/:id/offers/:offer_id/order", post(order_offer))
        // Forms and actions
        .route("/newsletter", post(subscribe))
        .route("/location-requests", post(request_location))
        .route("/franchise-inquiries", post(franchise_inquiry))
        .route("/sessions/:id/actions/:action_id", post(perform_action))
}
