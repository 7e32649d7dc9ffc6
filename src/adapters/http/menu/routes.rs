//! HTTP routes for menu endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    get_active_category, get_item, list_categories, list_category, list_menu, select_category,
};
use crate::adapters::http::AppState;

pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/menu", get(list_menu))
        .route("/menu/categories", get(list_categories))
        .route("/menu/categories/:category", get(list_category))
        .route("/menu/items/:id", get(get_item))
        .route(
            "/sessions/:id/menu/category",
            get(get_active_category).put(select_category),
        )
}
