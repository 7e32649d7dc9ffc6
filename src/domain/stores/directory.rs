//! Store directory and city filter.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{City, Store};

static STANDARD_DIRECTORY: Lazy<StoreDirectory> = Lazy::new(|| {
    StoreDirectory::from_yaml(include_str!("../../../content/stores.yaml"))
        .expect("bundled stores.yaml must be a valid store directory")
});

/// City selector: every store, or one city by id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CityFilter {
    #[default]
    All,
    City(String),
}

impl CityFilter {
    pub fn matches(&self, store: &Store) -> bool {
        match self {
            CityFilter::All => true,
            CityFilter::City(id) => store.city == *id,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CityFilter::All => "all",
            CityFilter::City(id) => id,
        }
    }
}

impl From<String> for CityFilter {
    fn from(value: String) -> Self {
        if value == "all" {
            CityFilter::All
        } else {
            CityFilter::City(value)
        }
    }
}

impl From<CityFilter> for String {
    fn from(filter: CityFilter) -> Self {
        filter.as_str().to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreDirectory {
    cities: Vec<City>,
    stores: Vec<Store>,
}

impl StoreDirectory {
    pub fn standard() -> &'static StoreDirectory {
        &STANDARD_DIRECTORY
    }

    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Whether `filter` names `all` or a known city.
    pub fn is_known(&self, filter: &CityFilter) -> bool {
        match filter {
            CityFilter::All => true,
            CityFilter::City(id) => self.cities.iter().any(|c| c.id == *id),
        }
    }

    pub fn filter(&self, filter: &CityFilter) -> Vec<&Store> {
        self.stores.iter().filter(|s| filter.matches(s)).collect()
    }

    pub fn find(&self, id: &str) -> Option<&Store> {
        self.stores.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> &'static StoreDirectory {
        StoreDirectory::standard()
    }

    #[test]
    fn standard_directory_has_six_stores_three_cities() {
        assert_eq!(directory().stores().len(), 6);
        let ids: Vec<_> = directory().cities().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["new-york", "los-angeles", "chicago"]);
    }

    #[test]
    fn all_filter_returns_every_store() {
        assert_eq!(directory().filter(&CityFilter::All).len(), 6);
    }

    #[test]
    fn city_filter_returns_matching_stores() {
        let chicago = directory().filter(&CityFilter::from("chicago".to_string()));
        let ids: Vec<_> = chicago.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "6"]);
    }

    #[test]
    fn unknown_city_is_not_known_and_matches_nothing() {
        let filter = CityFilter::from("boston".to_string());
        assert!(!directory().is_known(&filter));
        assert!(directory().filter(&filter).is_empty());
    }

    #[test]
    fn highway_rest_stop_is_closed() {
        assert!(!directory().find("5").unwrap().is_open);
    }
}
