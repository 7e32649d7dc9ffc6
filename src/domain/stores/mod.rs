//! Store locator domain module.

mod directory;
mod map;
mod store;

pub use directory::{CityFilter, StoreDirectory};
pub use map::MapView;
pub use store::{City, MapPin, Store};
