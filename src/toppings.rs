//! Toppings
//!
//! Per-topping price resolution. A topping's price list carries its own size
//! vocabulary, so resolution reuses the same label fallback chain as product
//! size matching, evaluated against the topping's entries.

use rust_decimal::Decimal;

use crate::{
    catalog::{Topping, ToppingGroup, ToppingId},
    sizes::match_label,
};

/// Resolves a topping's price for the given size label.
///
/// The target label should be the *product's resolved* size label, not the
/// raw requested one. Falls back through normalized exact match, leading
/// number, then the topping's first price entry; a topping with no price
/// entries contributes zero rather than failing the line.
#[must_use]
pub fn resolve_topping_price(topping: &Topping, target_label: &str) -> Decimal {
    match_label(&topping.prices, target_label)
        .map(|(_, entry)| entry.price)
        .or_else(|| topping.prices.first().map(|entry| entry.price))
        .unwrap_or(Decimal::ZERO)
}

/// Sums the resolved prices of the selected toppings.
///
/// Topping identity is exact, never fuzzy. Ids not present in the group are
/// silently skipped so the cart stays usable after catalog drift (a topping
/// deleted from its group after being added to a cart).
#[must_use]
pub fn topping_sum(group: &ToppingGroup, selected: &[ToppingId], target_label: &str) -> Decimal {
    selected
        .iter()
        .filter_map(|id| group.topping(id))
        .map(|topping| resolve_topping_price(topping, target_label))
        .sum()
}
