//! HTTP handlers for the store locator.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    HoverPinRequest, LocatorResponse, SelectCityRequest, StoreLinkResponse, StoreListQuery,
    StoreListResponse, StoreResponse,
};
use crate::adapters::http::error::{parse_session_id, ApiResult};
use crate::adapters::http::AppState;
use crate::domain::stores::{City, CityFilter};

// ════════════════════════════════════════════════════════════════════════════
// Directory
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/stores?city=new-york
pub async fn list_stores(
    State(state): State<AppState>,
    Query(query): Query<StoreListQuery>,
) -> ApiResult<Json<StoreListResponse>> {
    let filter = query.filter();
    let stores = state.stores.list(&filter)?;
    Ok(Json(StoreListResponse::new(filter, stores)))
}

/// GET /api/stores/cities
pub async fn list_cities(State(state): State<AppState>) -> Json<Vec<City>> {
    Json(state.stores.cities().to_vec())
}

/// GET /api/stores/:id
pub async fn get_store(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
) -> ApiResult<Json<StoreResponse>> {
    let store = state.stores.store(&store_id)?;
    Ok(Json(store.into()))
}

/// GET /api/stores/:id/directions - Google Maps link
pub async fn directions_link(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
) -> ApiResult<Json<StoreLinkResponse>> {
    Ok(Json(state.stores.directions_link(&store_id)?.into()))
}

/// GET /api/stores/:id/call - `tel:` link
pub async fn call_link(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
) -> ApiResult<Json<StoreLinkResponse>> {
    Ok(Json(state.stores.call_link(&store_id)?.into()))
}

// ════════════════════════════════════════════════════════════════════════════
// Visitor locator
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/sessions/:id/locator
pub async fn get_locator(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<LocatorResponse>> {
    let session_id = parse_session_id(&session_id)?;
    Ok(Json(state.stores.locator(&session_id).await?.into()))
}

/// PUT /api/sessions/:id/locator/city
pub async fn select_city(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SelectCityRequest>,
) -> ApiResult<Json<LocatorResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let filter = CityFilter::from(req.city);
    Ok(Json(state.stores.select_city(&session_id, filter).await?.into()))
}

/// POST /api/sessions/:id/locator/pins/:store_id - Select or deselect a pin
pub async fn toggle_pin(
    State(state): State<AppState>,
    Path((session_id, store_id)): Path<(String, String)>,
) -> ApiResult<Json<LocatorResponse>> {
    let session_id = parse_session_id(&session_id)?;
    Ok(Json(
        state.stores.toggle_pin(&session_id, &store_id).await?.into(),
    ))
}

/// POST /api/sessions/:id/locator/hover
pub async fn hover_pin(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<HoverPinRequest>,
) -> ApiResult<Json<LocatorResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let snapshot = state
        .stores
        .hover_pin(&session_id, req.store_id.as_deref())
        .await?;
    Ok(Json(snapshot.into()))
}

/// POST /api/sessions/:id/stores/:store_id/directions - Link plus a toast
pub async fn open_directions(
    State(state): State<AppState>,
    Path((session_id, store_id)): Path<(String, String)>,
) -> ApiResult<Json<StoreLinkResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let link = state.stores.open_directions(&session_id, &store_id).await?;
    Ok(Json(link.into()))
}

/// POST /api/sessions/:id/stores/:store_id/call - Link plus a toast
pub async fn place_call(
    State(state): State<AppState>,
    Path((session_id, store_id)): Path<(String, String)>,
) -> ApiResult<Json<StoreLinkResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let link = state.stores.place_call(&session_id, &store_id).await?;
    Ok(Json(link.into()))
}
