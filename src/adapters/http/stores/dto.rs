//! HTTP DTOs for the store locator.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{LocatorSnapshot, StoreLink};
use crate::domain::stores::{CityFilter, MapView, Store};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// `?city=` for the store list. Missing means every city.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreListQuery {
    #[serde(default)]
    pub city: Option<String>,
}

impl StoreListQuery {
    pub fn filter(&self) -> CityFilter {
        self.city
            .clone()
            .map(CityFilter::from)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectCityRequest {
    /// City id, or `all`.
    pub city: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HoverPinRequest {
    /// `null` when the pointer leaves the pin.
    #[serde(default)]
    pub store_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    #[serde(flatten)]
    pub store: Store,
    pub directions_url: String,
    pub call_link: String,
}

impl From<&Store> for StoreResponse {
    fn from(store: &Store) -> Self {
        Self {
            store: store.clone(),
            directions_url: store.directions_url(),
            call_link: store.call_link(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreListResponse {
    pub city: CityFilter,
    pub count: usize,
    pub stores: Vec<StoreResponse>,
}

impl StoreListResponse {
    pub fn new<'a>(city: CityFilter, stores: impl IntoIterator<Item = &'a Store>) -> Self {
        let stores: Vec<StoreResponse> = stores.into_iter().map(StoreResponse::from).collect();
        Self {
            city,
            count: stores.len(),
            stores,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreLinkResponse {
    pub url: String,
    pub message: String,
}

impl From<StoreLink> for StoreLinkResponse {
    fn from(link: StoreLink) -> Self {
        Self {
            url: link.url,
            message: link.message,
        }
    }
}

/// The visitor's locator view: city tab, filtered stores and map pins.
#[derive(Debug, Clone, Serialize)]
pub struct LocatorResponse {
    pub city: CityFilter,
    pub map: MapView,
    pub stores: Vec<StoreResponse>,
}

impl From<LocatorSnapshot> for LocatorResponse {
    fn from(snapshot: LocatorSnapshot) -> Self {
        Self {
            city: snapshot.city,
            map: snapshot.map,
            stores: snapshot.stores.iter().map(StoreResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_city_query_means_all() {
        assert_eq!(StoreListQuery::default().filter(), CityFilter::All);
        let query = StoreListQuery {
            city: Some("chicago".into()),
        };
        assert_eq!(query.filter(), CityFilter::City("chicago".into()));
    }

    #[test]
    fn hover_request_accepts_null() {
        let req: HoverPinRequest = serde_json::from_str(r#"{"store_id": null}"#).unwrap();
        assert!(req.store_id.is_none());
    }

    #[test]
    fn store_response_flattens_store_fields() {
        let store = crate::domain::stores::StoreDirectory::standard()
            .find("1")
            .cloned()
            .unwrap();
        let json = serde_json::to_value(StoreResponse::from(&store)).unwrap();
        assert_eq!(json["name"], "Downtown Location");
        assert_eq!(json["call_link"], "tel:(555) 123-4567");
    }
}
