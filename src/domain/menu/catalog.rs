//! Static menu catalog.
//!
//! The catalog ships inside the binary (`content/menu.yaml`) and is parsed
//! once on first use.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use super::{MenuCategory, MenuItem};

static STANDARD_CATALOG: Lazy<MenuCatalog> = Lazy::new(|| {
    MenuCatalog::from_yaml(include_str!("../../../content/menu.yaml"))
        .expect("bundled menu.yaml must be a valid catalog")
});

/// Errors loading or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("menu catalog is malformed: {0}")]
    Malformed(#[from] serde_yaml::Error),

    #[error("duplicate menu item id '{0}'")]
    DuplicateId(String),

    #[error("menu item '{0}' has a negative price")]
    NegativePrice(String),

    #[error("menu item '{0}' not found")]
    ItemNotFound(String),
}

#[derive(Deserialize)]
struct CatalogFile {
    items: Vec<MenuItem>,
}

/// Ordered, immutable list of menu items.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// The catalog bundled with the service.
    pub fn standard() -> &'static MenuCatalog {
        &STANDARD_CATALOG
    }

    /// Builds a catalog, rejecting duplicate ids and negative prices.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            if item.price.amount().is_sign_negative() && !item.price.is_zero() {
                return Err(CatalogError::NegativePrice(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(source)?;
        Self::new(file.items)
    }

    /// Every item in catalog order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Items of one category, catalog order preserved.
    pub fn by_category(&self, category: MenuCategory) -> Vec<&MenuItem> {
        self.items.iter().filter(|i| i.category == category).collect()
    }

    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Like [`find`](Self::find) but as an error for callers that must have the item.
    pub fn get(&self, id: &str) -> Result<&MenuItem, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::ItemNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Money;

    #[test]
    fn standard_catalog_has_44_items() {
        assert_eq!(MenuCatalog::standard().len(), 44);
    }

    #[test]
    fn standard_catalog_category_counts() {
        let catalog = MenuCatalog::standard();
        assert_eq!(catalog.by_category(MenuCategory::Chicken).len(), 12);
        assert_eq!(catalog.by_category(MenuCategory::Burgers).len(), 10);
        assert_eq!(catalog.by_category(MenuCategory::Sides).len(), 12);
        assert_eq!(catalog.by_category(MenuCategory::Combos).len(), 10);
    }

    #[test]
    fn by_category_preserves_catalog_order() {
        let chicken = MenuCatalog::standard().by_category(MenuCategory::Chicken);
        assert_eq!(chicken[0].id, "1");
        assert_eq!(chicken[1].id, "2");
        assert_eq!(chicken[2].id, "c3");
    }

    #[test]
    fn find_returns_item_with_flags() {
        let wings = MenuCatalog::standard().find("2").unwrap();
        assert_eq!(wings.name, "Spicy Wings");
        assert!(wings.is_spicy);
        assert_eq!(wings.price, Money::from_cents(999));
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let err = MenuCatalog::standard().get("nope").unwrap_err();
        assert!(matches!(err, CatalogError::ItemNotFound(id) if id == "nope"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let item = MenuItem::new("x", "X", Money::from_cents(100), MenuCategory::Sides);
        let err = MenuCatalog::new(vec![item.clone(), item]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(_)));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(matches!(
            MenuCatalog::from_yaml("items: [{ id: 1 }]"),
            Err(CatalogError::Malformed(_))
        ));
    }
}
