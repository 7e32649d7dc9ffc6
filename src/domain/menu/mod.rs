//! Menu domain module.
//!
//! - `category` - MenuCategory tabs
//! - `item` - MenuItem value object
//! - `catalog` - the static MenuCatalog

mod catalog;
mod category;
mod item;

pub use catalog::{CatalogError, MenuCatalog};
pub use category::MenuCategory;
pub use item::MenuItem;
