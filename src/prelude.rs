//! Tartine prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartTotals, CheckoutRules, PricedCart, aggregate, price_cart},
    catalog::{
        Accessory, AccessoryId, Cake, CakeId, CatalogSource, InMemoryCatalog, Pricing, Topping,
        ToppingGroup, ToppingGroupId, ToppingId,
        normalize::{LenientAmount, ListPayload},
    },
    discounts::{Discount, calculate_discount},
    fixtures::{Fixture, FixtureError},
    lines::{AccessoryRef, CartLine, ProductRef},
    pricing::{PricedLine, Unavailable, price_line},
    receipt::{Receipt, ReceiptError},
    sizes::{ResolvedSize, SizePrice, SizeSelector, resolve_size},
    toppings::{resolve_topping_price, topping_sum},
};
