//! HTTP handlers for menu endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{
    ActiveCategoryResponse, CategoryResponse, MenuItemResponse, MenuResponse,
    SelectCategoryRequest,
};
use crate::adapters::http::error::{parse_session_id, parse_value, ApiResult};
use crate::adapters::http::AppState;
use crate::domain::menu::MenuCategory;

/// GET /api/menu - Every menu item
pub async fn list_menu(State(state): State<AppState>) -> Json<MenuResponse> {
    Json(MenuResponse::from_items(state.menu.items()))
}

/// GET /api/menu/categories - Category tabs in display order
pub async fn list_categories() -> Json<Vec<CategoryResponse>> {
    Json(
        MenuCategory::all()
            .iter()
            .copied()
            .map(CategoryResponse::from)
            .collect(),
    )
}

/// GET /api/menu/categories/:category - Items in one category
pub async fn list_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Json<MenuResponse>> {
    let category: MenuCategory = parse_value(&category)?;
    Ok(Json(MenuResponse::from_items(state.menu.by_category(category))))
}

/// GET /api/menu/items/:id - One menu item
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> ApiResult<Json<MenuItemResponse>> {
    let item = state.menu.item(&item_id)?;
    Ok(Json(item.into()))
}

/// GET /api/sessions/:id/menu/category - The visitor's selected tab
pub async fn get_active_category(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<ActiveCategoryResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let category = state.menu.active_category(&session_id).await?;
    Ok(Json(ActiveCategoryResponse { category }))
}

/// PUT /api/sessions/:id/menu/category - Switch tabs
pub async fn select_category(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SelectCategoryRequest>,
) -> ApiResult<Json<ActiveCategoryResponse>> {
    let session_id = parse_session_id(&session_id)?;
    let category: MenuCategory = parse_value(&req.category)?;
    let category = state.menu.select_category(&session_id, category).await?;
    Ok(Json(ActiveCategoryResponse { category }))
}
