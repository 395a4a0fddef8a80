//! Discounts
//!
//! Cart-level discounts applied to the subtotal during aggregation. The
//! storefront reserves this as an extension point: default checkout rules
//! carry no discount, so totals come out with a zero discount unless one is
//! configured.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};

/// A single cart-level discount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Discount {
    /// A percentage of the subtotal, rounded to two decimal places.
    PercentageOfSubtotal(Percentage),

    /// A fixed amount off the subtotal.
    FixedAmount(Decimal),
}

/// Calculates the discount amount for a subtotal.
///
/// The result is clamped to `0..=subtotal`, so a discount can never drive a
/// total negative and a negative configuration contributes nothing.
#[must_use]
pub fn calculate_discount(discount: &Discount, subtotal: Decimal) -> Decimal {
    let amount = match discount {
        Discount::PercentageOfSubtotal(percent) => (*percent * subtotal)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        Discount::FixedAmount(amount) => *amount,
    };

    amount.clamp(Decimal::ZERO, subtotal.max(Decimal::ZERO))
}
