//! HTTP adapter for the store locator.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    HoverPinRequest, LocatorResponse, SelectCityRequest, StoreLinkResponse, StoreListQuery,
    StoreListResponse, StoreResponse,
};
pub use routes::store_routes;
