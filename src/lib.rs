//! Tartine
//!
//! Tartine is the pricing and cart-resolution engine for a bakery
//! storefront: it resolves size-based and flat cake prices, per-size topping
//! prices, and accessory attachments into priced lines, and aggregates them
//! into checkout totals with delivery-fee and discount rules.

pub mod cart;
pub mod catalog;
pub mod discounts;
pub mod fixtures;
pub mod lines;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod sizes;
pub mod toppings;
pub mod utils;
