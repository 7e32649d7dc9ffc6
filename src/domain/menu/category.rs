//! Menu categories.

use serde::{Deserialize, Serialize};

/// Menu tab. Display order is the declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    #[default]
    Chicken,
    Burgers,
    Sides,
    Combos,
}

impl MenuCategory {
    /// All categories in display order.
    pub fn all() -> &'static [MenuCategory] {
        &[
            MenuCategory::Chicken,
            MenuCategory::Burgers,
            MenuCategory::Sides,
            MenuCategory::Combos,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Chicken => "chicken",
            MenuCategory::Burgers => "burgers",
            MenuCategory::Sides => "sides",
            MenuCategory::Combos => "combos",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MenuCategory::Chicken => "Chicken",
            MenuCategory::Burgers => "Burgers",
            MenuCategory::Sides => "Sides",
            MenuCategory::Combos => "Combos",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MenuCategory::Chicken => "🍗",
            MenuCategory::Burgers => "🍔",
            MenuCategory::Sides => "🍟",
            MenuCategory::Combos => "🥤",
        }
    }
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MenuCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chicken" => Ok(MenuCategory::Chicken),
            "burgers" => Ok(MenuCategory::Burgers),
            "sides" => Ok(MenuCategory::Sides),
            "combos" => Ok(MenuCategory::Combos),
            _ => Err(format!("Invalid menu category: {}", s)),
        }
    }
}
