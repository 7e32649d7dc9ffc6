//! HTTP adapter for the menu catalog and the active category tab.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ActiveCategoryResponse, CategoryResponse, MenuItemResponse, MenuResponse,
    SelectCategoryRequest,
};
pub use routes::menu_routes;
