//! HTTP DTOs for menu endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::menu::{MenuCategory, MenuItem};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct SelectCategoryRequest {
    pub category: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct MenuItemResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Decimal string, e.g. `8.99`.
    pub price: String,
    /// Formatted for display, e.g. `$8.99`.
    pub price_display: String,
    pub image: String,
    pub category: MenuCategory,
    pub is_popular: bool,
    pub is_spicy: bool,
}

impl From<&MenuItem> for MenuItemResponse {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_plain_string(),
            price_display: item.price.to_string(),
            image: item.image.clone(),
            category: item.category,
            is_popular: item.is_popular,
            is_spicy: item.is_spicy,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuResponse {
    pub count: usize,
    pub items: Vec<MenuItemResponse>,
}

impl MenuResponse {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> Self {
        let items: Vec<MenuItemResponse> = items.into_iter().map(MenuItemResponse::from).collect();
        Self {
            count: items.len(),
            items,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: MenuCategory,
    pub name: &'static str,
    pub icon: &'static str,
}

impl From<MenuCategory> for CategoryResponse {
    fn from(category: MenuCategory) -> Self {
        Self {
            id: category,
            name: category.display_name(),
            icon: category.icon(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActiveCategoryResponse {
    pub category: MenuCategory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Money;

    #[test]
    fn item_response_carries_both_price_forms() {
        let item = MenuItem::new("1", "Original Crispy", Money::from_cents(899), MenuCategory::Chicken);
        let response = MenuItemResponse::from(&item);
        assert_eq!(response.price, "8.99");
        assert_eq!(response.price_display, "$8.99");
    }

    #[test]
    fn category_response_serializes_lowercase_id() {
        let json = serde_json::to_value(CategoryResponse::from(MenuCategory::Sides)).unwrap();
        assert_eq!(json["id"], "sides");
        assert_eq!(json["name"], "Sides");
    }
}
