//! Cart
//!
//! The cart aggregate: an ordered list of lines, priced as a whole and
//! summed into checkout totals. Every surface that shows a total (cart page,
//! checkout, order view, exports) goes through [`aggregate`], so they can
//! never drift apart on fallback ordering again.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::CatalogSource,
    discounts::{Discount, calculate_discount},
    lines::CartLine,
    pricing::{PricedLine, price_line},
};

/// Business rules applied at aggregation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckoutRules {
    /// Flat delivery fee charged below the free-delivery threshold.
    pub delivery_fee: Decimal,

    /// Subtotals at or above this amount ship free.
    pub free_delivery_threshold: Decimal,

    /// Optional cart-level discount; `None` means a zero discount.
    pub discount: Option<Discount>,
}

impl Default for CheckoutRules {
    fn default() -> Self {
        Self {
            delivery_fee: Decimal::from(60),
            free_delivery_threshold: Decimal::from(1000),
            discount: None,
        }
    }
}

/// Totals for a priced cart or order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of line totals across available lines.
    pub subtotal: Decimal,

    /// Delivery fee, zero for empty carts and above the threshold.
    pub delivery_fee: Decimal,

    /// Discount taken off the subtotal; zero unless rules configure one.
    pub discount: Decimal,

    /// `subtotal + delivery_fee - discount`.
    pub total: Decimal,
}

/// An ordered list of cart lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cart with the given lines.
    #[must_use]
    pub fn with_lines(lines: impl Into<Vec<CartLine>>) -> Self {
        Self {
            lines: lines.into(),
        }
    }

    /// Appends a line.
    pub fn push(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    /// The lines in cart order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A cart after resolution: every line priced, totals computed.
///
/// Plain owned data; the order-submission collaborator snapshots this into
/// the persisted order record so historical orders stay immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedCart {
    /// Priced lines in cart order, unavailable ones included and flagged.
    pub lines: Vec<PricedLine>,

    /// Aggregated totals over the available lines.
    pub totals: CartTotals,
}

/// Prices every line of a cart against the catalog and aggregates totals.
///
/// Totals must be recomputed through this whenever quantity, size, or
/// toppings change on any line; nothing here is cached.
pub fn price_cart(cart: &Cart, catalog: &impl CatalogSource, rules: &CheckoutRules) -> PricedCart {
    let lines: Vec<PricedLine> = cart
        .lines()
        .iter()
        .map(|line| price_line(line, catalog))
        .collect();

    let totals = aggregate(&lines, rules);

    PricedCart { lines, totals }
}

/// Sums priced lines into checkout totals.
///
/// Unavailable lines are excluded from the subtotal but remain in the input
/// untouched; aggregation is pure and idempotent. The delivery fee applies
/// only when `0 < subtotal < threshold`.
#[must_use]
pub fn aggregate(lines: &[PricedLine], rules: &CheckoutRules) -> CartTotals {
    let subtotal: Decimal = lines
        .iter()
        .filter(|line| line.is_available())
        .map(|line| line.line_total)
        .sum();

    let delivery_fee = if subtotal > Decimal::ZERO && subtotal < rules.free_delivery_threshold {
        rules.delivery_fee
    } else {
        Decimal::ZERO
    };

    let discount = rules
        .discount
        .as_ref()
        .map_or(Decimal::ZERO, |discount| {
            calculate_discount(discount, subtotal)
        });

    CartTotals {
        subtotal,
        delivery_fee,
        discount,
        total: subtotal + delivery_fee - discount,
    }
}

#[cfg(test)]
mod tests {
    use decimal_percentage::Percentage;

    use super::*;
    use crate::{lines::ProductRef, pricing::Unavailable};

    fn priced(line_total: i64, unavailable: Option<Unavailable>) -> PricedLine {
        PricedLine {
            product: ProductRef::Cake("test".into()),
            name: "Test".to_string(),
            quantity: 1,
            resolved_size: None,
            unit_price: Decimal::from(line_total),
            line_total: Decimal::from(line_total),
            unavailable,
        }
    }

    #[test]
    fn subtotal_excludes_unavailable_lines() {
        let lines = [
            priced(100, None),
            priced(200, Some(Unavailable::MissingProduct)),
        ];

        let totals = aggregate(&lines, &CheckoutRules::default());

        assert_eq!(totals.subtotal, Decimal::from(100));
    }

    #[test]
    fn delivery_fee_applies_only_between_zero_and_threshold() {
        let rules = CheckoutRules::default();

        let below = aggregate(&[priced(500, None)], &rules);
        let empty = aggregate(&[], &rules);
        let above = aggregate(&[priced(1500, None)], &rules);
        let at_threshold = aggregate(&[priced(1000, None)], &rules);

        assert_eq!(below.delivery_fee, Decimal::from(60));
        assert_eq!(empty.delivery_fee, Decimal::ZERO);
        assert_eq!(above.delivery_fee, Decimal::ZERO);
        assert_eq!(at_threshold.delivery_fee, Decimal::ZERO);
    }

    #[test]
    fn total_is_subtotal_plus_fee_minus_discount() {
        let rules = CheckoutRules {
            discount: Some(Discount::FixedAmount(Decimal::from(50))),
            ..CheckoutRules::default()
        };

        let totals = aggregate(&[priced(500, None)], &rules);

        assert_eq!(totals.subtotal, Decimal::from(500));
        assert_eq!(totals.delivery_fee, Decimal::from(60));
        assert_eq!(totals.discount, Decimal::from(50));
        assert_eq!(totals.total, Decimal::from(510));
    }

    #[test]
    fn percentage_discount_flows_through_rules() {
        let rules = CheckoutRules {
            discount: Some(Discount::PercentageOfSubtotal(Percentage::from(0.1))),
            ..CheckoutRules::default()
        };

        let totals = aggregate(&[priced(2000, None)], &rules);

        assert_eq!(totals.discount, Decimal::from(200));
        assert_eq!(totals.total, Decimal::from(1800));
    }

    #[test]
    fn aggregation_is_idempotent_and_never_mutates_input() {
        let lines = [priced(100, None), priced(300, None)];
        let snapshot = lines.clone();
        let rules = CheckoutRules::default();

        let first = aggregate(&lines, &rules);
        let second = aggregate(&lines, &rules);

        assert_eq!(first, second);
        assert_eq!(lines, snapshot);
    }

    #[test]
    fn default_rules_carry_no_discount() {
        let totals = aggregate(&[priced(400, None)], &CheckoutRules::default());

        assert_eq!(totals.discount, Decimal::ZERO);
    }
}
