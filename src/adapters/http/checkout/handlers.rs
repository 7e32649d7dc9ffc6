//! HTTP handlers for checkout endpoints.
//!
//! Order placement only starts the simulated payment; the confirmation and
//! the tracker arrive later as toasts and state changes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CheckoutResponse, PendingOrderResponse, SelectPaymentMethodRequest, SelectTabRequest,
    SelectWalletRequest, VerifyUpiRequest,
};
use crate::adapters::http::error::{parse_session_id, parse_value, ApiResult};
use crate::adapters::http::AppState;
use crate::domain::checkout::{CheckoutTab, PaymentMethod, Wallet};

/// GET /api/sessions/:id/checkout
pub async fn get_checkout(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<CheckoutResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let checkout = state.checkout.view(&session_id).await?;
    Ok(Json((&checkout).into()))
}

/// POST /api/sessions/:id/checkout/tab
pub async fn select_tab(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SelectTabRequest>,
) -> ApiResult<Json<CheckoutResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let tab: CheckoutTab = parse_value(&req.tab)?;
    let checkout = state.checkout.select_tab(&session_id, tab).await?;
    Ok(Json((&checkout).into()))
}

/// POST /api/sessions/:id/checkout/payment-method
pub async fn select_payment_method(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SelectPaymentMethodRequest>,
) -> ApiResult<Json<CheckoutResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let method: PaymentMethod = parse_value(&req.method)?;
    let checkout = state
        .checkout
        .select_payment_method(&session_id, method)
        .await?;
    Ok(Json((&checkout).into()))
}

/// POST /api/sessions/:id/checkout/wallet
pub async fn select_wallet(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SelectWalletRequest>,
) -> ApiResult<Json<CheckoutResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let wallet: Wallet = parse_value(&req.wallet)?;
    let checkout = state.checkout.select_wallet(&session_id, wallet).await?;
    Ok(Json((&checkout).into()))
}

/// POST /api/sessions/:id/checkout/upi - Set the UPI id and start verifying
///
/// A blank id queues an error toast and leaves the checkout unchanged.
pub async fn verify_upi(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<VerifyUpiRequest>,
) -> ApiResult<Json<CheckoutResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let checkout = state.checkout.verify_upi(&session_id, &req.upi_id).await?;
    Ok(Json((&checkout).into()))
}

/// POST /api/sessions/:id/checkout/place-order - Start the simulated payment
pub async fn place_order(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<(StatusCode, Json<PendingOrderResponse>)> {
    let session_id = parse_session_id(&session_id)?;
    let order = state.checkout.place_order(&session_id).await?;
    Ok((StatusCode::ACCEPTED, Json((&order).into())))
}
