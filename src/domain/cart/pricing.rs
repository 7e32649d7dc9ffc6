//! Cart pricing calculator.
//!
//! Pure function of the cart lines. Every component keeps full decimal
//! precision; only the displayed strings are rounded to cents.

use rust_decimal::Decimal;
use serde::Serialize;

use super::CartLine;
use crate::domain::foundation::Money;

/// GST, 18% of the subtotal.
pub const TAX_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Service charge, 5% of the subtotal.
pub const SERVICE_CHARGE_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Flat packaging fee in cents.
pub const PACKAGING_FEE_CENTS: i64 = 150;

/// Delivery fee in cents when the subtotal does not exceed the threshold.
pub const DELIVERY_FEE_CENTS: i64 = 299;

/// Delivery is free only when the subtotal is strictly above this, in cents.
pub const FREE_DELIVERY_THRESHOLD_CENTS: i64 = 2500;

/// Derived totals for a cart. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceSummary {
    pub subtotal: Money,
    pub tax: Money,
    pub service_charge: Money,
    pub packaging_fee: Money,
    pub delivery_fee: Money,
    pub discount: Money,
    pub total: Money,
}

/// One row of the itemized bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillLine {
    pub label: &'static str,
    pub amount: Money,
    pub display: String,
}

impl BillLine {
    fn new(label: &'static str, amount: Money) -> Self {
        Self {
            label,
            amount,
            display: amount.to_string(),
        }
    }
}

impl PriceSummary {
    pub fn calculate(lines: &[CartLine]) -> Self {
        let subtotal: Money = lines.iter().map(CartLine::line_total).sum();
        let tax = subtotal.times_rate(TAX_RATE);
        let service_charge = subtotal.times_rate(SERVICE_CHARGE_RATE);
        // Charged even for an empty cart; the storefront hides totals then.
        let packaging_fee = Money::from_cents(PACKAGING_FEE_CENTS);
        let delivery_fee = if subtotal > Money::from_cents(FREE_DELIVERY_THRESHOLD_CENTS) {
            Money::ZERO
        } else {
            Money::from_cents(DELIVERY_FEE_CENTS)
        };
        // Promo codes are copy-only and never discount the order.
        let discount = Money::ZERO;
        let total = subtotal + tax + service_charge + packaging_fee + delivery_fee - discount;

        Self {
            subtotal,
            tax,
            service_charge,
            packaging_fee,
            delivery_fee,
            discount,
            total,
        }
    }

    pub fn has_free_delivery(&self) -> bool {
        self.delivery_fee.is_zero()
    }

    /// Tax, service charge and packaging collapsed into one figure, as shown
    /// on the payment summary.
    pub fn taxes_and_charges(&self) -> Money {
        self.tax + self.service_charge + self.packaging_fee
    }

    /// Itemized bill rows in display order.
    pub fn bill_lines(&self) -> Vec<BillLine> {
        let mut lines = vec![
            BillLine::new("Subtotal", self.subtotal),
            BillLine::new("GST (18%)", self.tax),
            BillLine::new("Service Charge (5%)", self.service_charge),
            BillLine::new("Packaging Fee", self.packaging_fee),
        ];

        let mut delivery = BillLine::new("Delivery", self.delivery_fee);
        if self.has_free_delivery() {
            delivery.display = "FREE".to_string();
        }
        lines.push(delivery);

        if !self.discount.is_zero() {
            lines.push(BillLine::new("Discount", self.discount));
        }
        lines.push(BillLine::new("Total Amount", self.total));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::Cart;
    use crate::domain::menu::{MenuCategory, MenuItem};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn line(cents: i64, quantity: u32) -> CartLine {
        CartLine {
            item: MenuItem::new(
                format!("item-{}", cents),
                "Test Item",
                Money::from_cents(cents),
                MenuCategory::Chicken,
            ),
            quantity,
        }
    }

    fn money(s: &str) -> Money {
        Money::from_decimal(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn worked_example_two_items_at_8_99() {
        let summary = PriceSummary::calculate(&[line(899, 2)]);

        assert_eq!(summary.subtotal, money("17.98"));
        assert_eq!(summary.tax, money("3.2364"));
        assert_eq!(summary.service_charge, money("0.899"));
        assert_eq!(summary.packaging_fee, money("1.50"));
        assert_eq!(summary.delivery_fee, money("2.99"));
        assert_eq!(summary.discount, Money::ZERO);
        assert_eq!(summary.total, money("26.6054"));
        assert_eq!(summary.total.to_string(), "$26.61");
    }

    #[test]
    fn subtotal_of_exactly_25_still_pays_delivery() {
        let summary = PriceSummary::calculate(&[line(2500, 1)]);
        assert_eq!(summary.delivery_fee, money("2.99"));
    }

    #[test]
    fn subtotal_just_over_25_gets_free_delivery() {
        let summary = PriceSummary::calculate(&[line(2501, 1)]);
        assert_eq!(summary.delivery_fee, Money::ZERO);
        assert!(summary.has_free_delivery());
    }

    #[test]
    fn empty_cart_still_carries_fixed_fees() {
        let summary = PriceSummary::calculate(&[]);
        assert_eq!(summary.subtotal, Money::ZERO);
        assert_eq!(summary.total, money("4.49"));
    }

    #[test]
    fn taxes_and_charges_collapse_three_components() {
        let summary = PriceSummary::calculate(&[line(899, 2)]);
        assert_eq!(summary.taxes_and_charges(), money("5.6354"));
    }

    #[test]
    fn bill_shows_free_delivery_and_hides_zero_discount() {
        let summary = PriceSummary::calculate(&[line(3000, 1)]);
        let bill = summary.bill_lines();

        let labels: Vec<_> = bill.iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec![
                "Subtotal",
                "GST (18%)",
                "Service Charge (5%)",
                "Packaging Fee",
                "Delivery",
                "Total Amount"
            ]
        );
        assert_eq!(bill[4].display, "FREE");
        assert_eq!(bill[5].display, "$39.40");
    }

    fn cart_lines() -> impl Strategy<Value = Vec<CartLine>> {
        prop::collection::vec((0i64..100_000, 1u32..50), 0..12).prop_map(|pairs| {
            pairs
                .into_iter()
                .enumerate()
                .map(|(i, (cents, qty))| CartLine {
                    item: MenuItem::new(
                        format!("p{}", i),
                        "Generated",
                        Money::from_cents(cents),
                        MenuCategory::Sides,
                    ),
                    quantity: qty,
                })
                .collect()
        })
    }

    /// Quantities across the whole `u32` range.
    fn large_quantity_lines() -> impl Strategy<Value = Vec<CartLine>> {
        prop::collection::vec((0i64..100_000, 1u32..=u32::MAX), 1..12).prop_map(|pairs| {
            pairs
                .into_iter()
                .enumerate()
                .map(|(i, (cents, qty))| CartLine {
                    item: MenuItem::new(
                        format!("q{}", i),
                        "Bulk",
                        Money::from_cents(cents),
                        MenuCategory::Combos,
                    ),
                    quantity: qty,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_large_quantities_price_exactly(lines in large_quantity_lines()) {
            let s = PriceSummary::calculate(&lines);
            let expected: Decimal = lines
                .iter()
                .map(|l| l.item.price.amount() * Decimal::from(l.quantity))
                .sum();
            prop_assert_eq!(s.subtotal.amount(), expected);
            prop_assert!(s.total >= s.subtotal);
        }

        #[test]
        fn prop_item_count_saturates_instead_of_wrapping(lines in large_quantity_lines()) {
            let mut cart = Cart::new();
            for line in &lines {
                cart.add_item(&line.item);
                cart.set_quantity(line.item_id(), line.quantity);
            }
            let exact: u64 = lines.iter().map(|l| u64::from(l.quantity)).sum();
            prop_assert_eq!(u64::from(cart.item_count()), exact.min(u64::from(u32::MAX)));
            prop_assert!(cart.lines().iter().all(|l| l.quantity >= 1));
        }
    }

    proptest! {
        /// Fees and charges are never negative, so the total covers the subtotal.
        #[test]
        fn prop_total_never_below_subtotal(lines in cart_lines()) {
            let summary = PriceSummary::calculate(&lines);
            prop_assert!(summary.total >= summary.subtotal);
        }

        #[test]
        fn prop_calculation_is_idempotent(lines in cart_lines()) {
            prop_assert_eq!(PriceSummary::calculate(&lines), PriceSummary::calculate(&lines));
        }

        #[test]
        fn prop_total_is_sum_of_components(lines in cart_lines()) {
            let s = PriceSummary::calculate(&lines);
            prop_assert_eq!(
                s.total,
                s.subtotal + s.tax + s.service_charge + s.packaging_fee + s.delivery_fee - s.discount
            );
        }

        #[test]
        fn prop_delivery_free_iff_subtotal_above_threshold(lines in cart_lines()) {
            let s = PriceSummary::calculate(&lines);
            let above = s.subtotal > Money::from_cents(FREE_DELIVERY_THRESHOLD_CENTS);
            prop_assert_eq!(s.has_free_delivery(), above);
        }

        #[test]
        fn prop_discount_is_always_zero(lines in cart_lines()) {
            prop_assert!(PriceSummary::calculate(&lines).discount.is_zero());
        }
    }
}
