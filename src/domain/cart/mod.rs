//! Cart domain module.
//!
//! - `line` - CartLine value object
//! - `cart` - Cart aggregate and its mutations
//! - `pricing` - PriceSummary calculator

mod cart;
mod line;
mod pricing;

pub use cart::{Cart, CartChange};
pub use line::CartLine;
pub use pricing::{
    BillLine, PriceSummary, DELIVERY_FEE_CENTS, FREE_DELIVERY_THRESHOLD_CENTS,
    PACKAGING_FEE_CENTS, SERVICE_CHARGE_RATE, TAX_RATE,
};
