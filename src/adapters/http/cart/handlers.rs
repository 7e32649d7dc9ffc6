//! HTTP handlers for cart endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{AddItemRequest, CartResponse, SetQuantityRequest};
use crate::adapters::http::error::{parse_session_id, ApiResult};
use crate::adapters::http::AppState;

/// GET /api/sessions/:id/cart - Lines, counts and the price summary
pub async fn get_cart(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<CartResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let snapshot = state.cart.view(&session_id).await?;
    Ok(Json(snapshot.into()))
}

/// POST /api/sessions/:id/cart/items - Add one unit of a menu item
pub async fn add_item(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<AddItemRequest>,
) -> ApiResult<Json<CartResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let snapshot = state.cart.add_item(&session_id, &req.item_id).await?;
    Ok(Json(snapshot.into()))
}

/// PUT /api/sessions/:id/cart/items/:item_id - Set a line's quantity
pub async fn set_quantity(
    State(state): State<AppState>,
    Path((session_id, item_id)): Path<(String, String)>,
    Json(req): Json<SetQuantityRequest>,
) -> ApiResult<Json<CartResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let snapshot = state
        .cart
        .set_quantity(&session_id, &item_id, req.quantity)
        .await?;
    Ok(Json(snapshot.into()))
}

/// DELETE /api/sessions/:id/cart/items/:item_id - Remove a line
pub async fn remove_item(
    State(state): State<AppState>,
    Path((session_id, item_id)): Path<(String, String)>,
) -> ApiResult<Json<CartResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let snapshot = state.cart.remove_item(&session_id, &item_id).await?;
    Ok(Json(snapshot.into()))
}

/// POST /api/sessions/:id/cart/open
pub async fn open_cart(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<CartResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let snapshot = state.cart.set_open(&session_id, true).await?;
    Ok(Json(snapshot.into()))
}

/// POST /api/sessions/:id/cart/close
pub async fn close_cart(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<CartResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let snapshot = state.cart.set_open(&session_id, false).await?;
    Ok(Json(snapshot.into()))
}
